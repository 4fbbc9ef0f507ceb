use await_at_least::WaitExt;
use std::time::{Duration, Instant};
use tokio::time::sleep;

#[tokio::main]
async fn main() {
    let fetch = async {
        sleep(Duration::from_millis(120)).await;
        "payload"
    };

    let start = Instant::now();
    // The fetch finishes in ~120 ms but the result only surfaces at 800 ms,
    // so a spinner covering it would not flash.
    let value = fetch.at_least(Duration::from_millis(800)).await;
    println!("Got {value:?} after {:?}", start.elapsed());
}
