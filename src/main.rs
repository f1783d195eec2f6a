#[tokio::main]
async fn main() {
    if let Err(e) = carebridge_lib::run().await {
        eprintln!("carebridge: {e}");
        std::process::exit(1);
    }
}
