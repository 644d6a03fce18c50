#[tokio::main]
async fn main() -> anyhow::Result<()> {
    study_companion_backend::run().await
}
