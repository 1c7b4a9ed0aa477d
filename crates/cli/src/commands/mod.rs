pub mod report;
pub mod run;
pub mod sweep;

pub(crate) fn worker_count(workers: usize) -> Option<usize> {
    if workers == 0 {
        None
    } else {
        Some(workers)
    }
}
