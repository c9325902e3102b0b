use clap::Parser;

use eventora_bootstrap::Args;

#[tokio::main]
async fn main() {
    let args = Args::parse();
    let code = eventora_bootstrap::run(args).await;
    std::process::exit(code);
}
