use logconsole::error::ConsoleError;

#[tokio::main]
async fn main() -> Result<(), ConsoleError> {
    logconsole::app::run().await
}
