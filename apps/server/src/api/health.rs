/// Liveness probe. Reports only that the process is serving requests.
pub async fn healthz() -> &'static str {
    "OK"
}
