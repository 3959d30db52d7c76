// Layout heuristics applied to templated LaTeX text.
// Pure string transforms; no typesetting or font measurement happens here.

pub mod bullets;

pub use bullets::BulletLimiter;
