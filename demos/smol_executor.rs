use await_at_least::WaitExt;
use macro_rules_attribute::apply;
use smol::Timer;
use smol_macros::{Executor, main};
use std::time::{Duration, Instant};

#[apply(main!)]
async fn main(ex: &Executor<'_>) {
    let work = async {
        Timer::after(Duration::from_millis(100)).await;
        "done"
    };

    let start = Instant::now();
    let task = ex.spawn(work.at_least(Duration::from_secs(1)));
    println!("{} after {:?}", task.await, start.elapsed());
}
