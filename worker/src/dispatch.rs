// ═══════════════════════════════════════════════════════════════════════
// Batch dispatch — serve many requests in parallel on one worker
// ═══════════════════════════════════════════════════════════════════════

use crate::message::{RequestEnvelope, ResponseEnvelope};
use crate::worker::Worker;
use rayon::prelude::*;
use tracing::info;

/// Build the thread pool batch dispatch runs on. `0` threads lets rayon
/// pick one per core.
pub fn build_pool(threads: usize) -> Result<rayon::ThreadPool, rayon::ThreadPoolBuildError> {
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .thread_name(|i| format!("ur-worker-{}", i))
        .build()
}

/// Handle every request concurrently. The returned responses are in
/// request order, but callers should still match them up by request id.
pub fn dispatch_batch(worker: &Worker, requests: &[RequestEnvelope]) -> Vec<ResponseEnvelope> {
    let responses: Vec<ResponseEnvelope> = requests.par_iter().map(|r| worker.handle(r)).collect();
    let failed = responses.iter().filter(|r| r.is_error()).count();
    info!(requests = requests.len(), failed, "batch dispatched");
    responses
}

/// Same as [`dispatch_batch`] for raw JSON lines.
pub fn dispatch_lines(worker: &Worker, lines: &[String]) -> Vec<ResponseEnvelope> {
    lines.par_iter().map(|line| worker.handle_line(line)).collect()
}
