pub async fn get_root() -> &'static str {
    "OK"
}
