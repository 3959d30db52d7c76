// LaTeX preamble for generated resumes.
// Placeholders `{timestamp}`, `{job_type}` and `{keyword_count}` are replaced before use.

use chrono::{DateTime, Local};

use crate::models::JobCategory;

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

pub const PREAMBLE_TEMPLATE: &str = r"%-------------------------
% ATS Optimized Resume
% Generated: {timestamp}
% Job Type: {job_type}
% Keywords: {keyword_count} strategic terms
%------------------------

\documentclass[letterpaper,11pt]{article}

\usepackage{fontawesome5}
\usepackage{latexsym}
\usepackage[empty]{fullpage}
\usepackage{titlesec}
\usepackage{marvosym}
\usepackage[usenames,dvipsnames]{color}
\usepackage{verbatim}
\usepackage{enumitem}
\usepackage[hidelinks]{hyperref}
\usepackage{fancyhdr}
\usepackage[english]{babel}
\usepackage{tabularx}
\input{glyphtounicode}

% Font and formatting
\usepackage[default]{lato}
\pagestyle{fancy}
\fancyhf{}
\renewcommand{\headrulewidth}{0pt}
\renewcommand{\footrulewidth}{0pt}

% Margins
\addtolength{\oddsidemargin}{-0.5in}
\addtolength{\evensidemargin}{-0.5in}
\addtolength{\textwidth}{1in}
\addtolength{\topmargin}{-0.7in}
\addtolength{\textheight}{1.5in}

\urlstyle{same}
\raggedbottom
\raggedright
\setlength{\tabcolsep}{0in}

% Section formatting
\titleformat{\section}{\vspace{-13pt}\scshape\raggedright\large}{}{0em}{}[\color{black}\titlerule\vspace{-5pt}]
\pdfgentounicode=1

% Commands
\newcommand{\resumeItem}[1]{\item\small{{#1 \vspace{-2pt}}}}
\newcommand{\resumeSubheading}[4]{\vspace{-2pt}\item\textbf{#1}, \textit{\small #3}, \hfill \textit{\small #4} \vspace{-7pt}}
\newcommand{\resumeProjectHeading}[2]{\item\begin{tabular*}{0.97\textwidth}{l@{\extracolsep{\fill}}r}\small#1 & #2 \\\end{tabular*}\vspace{-7pt}}
\newcommand{\resumeSubItem}[1]{\resumeItem{#1}\vspace{-4pt}}
\renewcommand\labelitemii{$\vcenter{\hbox{\tiny$\bullet$}}$}
\newcommand{\resumeSubHeadingListStart}{\begin{itemize}[leftmargin=0.15in, label={}]}
\newcommand{\resumeSubHeadingListEnd}{\end{itemize}}
\newcommand{\resumeItemListStart}{\begin{itemize}}
\newcommand{\resumeItemListEnd}{\end{itemize}\vspace{-5pt}}

\begin{document}";

pub const DOCUMENT_END: &str = "\\end{document}";

/// Fills the preamble comments for one generated document.
pub fn render_preamble(
    generated_at: &DateTime<Local>,
    category: JobCategory,
    keyword_count: usize,
) -> String {
    PREAMBLE_TEMPLATE
        .replace("{timestamp}", &generated_at.format(TIMESTAMP_FORMAT).to_string())
        .replace("{job_type}", category.label())
        .replace("{keyword_count}", &keyword_count.to_string())
}
