// Final document rendering: preamble text, assembly order, output file naming and writing.

pub mod assembler;
pub mod preamble;

pub use assembler::{
    assemble_document, output_filename, write_document, DocumentParts,
    WrittenDocument,
};
pub use preamble::render_preamble;
