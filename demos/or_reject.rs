use await_at_least::WaitExt;
use std::time::{Duration, Instant};
use tokio::time::sleep;

#[tokio::main]
async fn main() {
    let failing = async {
        sleep(Duration::from_millis(50)).await;
        Err::<&str, _>("connection refused")
    };

    let start = Instant::now();
    match failing.at_least_or_reject(Duration::from_millis(800)).await {
        Ok(value) => println!("Got {value:?} after {:?}", start.elapsed()),
        Err(error) => println!("Failed fast after {:?}: {error}", start.elapsed()),
    }
}
