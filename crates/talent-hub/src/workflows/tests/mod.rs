mod common;
mod interview;
mod job_posting;
