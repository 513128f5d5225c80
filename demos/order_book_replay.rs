// Example: order_book_replay.rs
// Drives the toy order book for a number of frames, submits a few user orders
// along the way and prints the ladder and trades tape. The mid price over time
// is drawn to order_book_mid.svg.
//
// Usage:
//     cargo run --example order_book_replay -- [frames]

use std::env;
use std::error::Error;

use plotters::prelude::*;
use quant_lab::{default_configs, open_order_book, Order, OrderBook, Side};
use tracing_subscriber::EnvFilter;

fn print_ladder(book: &OrderBook) {
    let depth = book.max_depth();
    println!("{:>10} {:>9}   {:<9} {:<10}", "bid size", "bid", "ask", "ask size");
    for (bid, ask) in book.bids().iter().zip(book.asks()) {
        let bid_bar = "#".repeat((bid.size / depth * 10.0).round() as usize);
        let ask_bar = "#".repeat((ask.size / depth * 10.0).round() as usize);
        println!(
            "{:>10} {:>9.2}   {:<9.2} {:<10}  {:>7.0} / {:<7.0}",
            bid_bar, bid.price, ask.price, ask_bar, bid.size, ask.size
        );
    }
    println!(
        "mid {:.3}  spread {:.2}\nrecent trades:",
        book.mid(),
        book.spread()
    );
    for trade in book.trades() {
        println!(
            "  #{:<4} {:>4} {:>6.0} @ {:.2}",
            trade.id,
            format!("{:?}", trade.side).to_uppercase(),
            trade.size,
            trade.price
        );
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let frames: usize = match env::args().nth(1) {
        Some(n) => n.parse()?,
        None => 300,
    };

    let config = default_configs::standard().with_seed(11);
    let (mut book, mut rng) = open_order_book(&config);
    let mut mids = Vec::with_capacity(frames + 1);
    mids.push((0usize, book.mid()));

    for frame in 1..=frames {
        book.tick(&mut rng);
        match frame % 100 {
            25 => {
                book.submit(Order::market(Side::Buy, 150.0), &mut rng);
            }
            50 => {
                let price = book.best_bid() + config.order_book.tick;
                book.submit(Order::limit(Side::Buy, price, 80.0), &mut rng);
            }
            75 => {
                book.submit(Order::market(Side::Sell, 300.0), &mut rng);
            }
            _ => {}
        }
        mids.push((frame, book.mid()));
    }

    print_ladder(&book);

    let lo = mids.iter().map(|&(_, m)| m).fold(f64::INFINITY, f64::min);
    let hi = mids.iter().map(|&(_, m)| m).fold(f64::NEG_INFINITY, f64::max);
    let pad = (hi - lo).max(config.order_book.tick);

    let root = SVGBackend::new("order_book_mid.svg", (1280, 512)).into_drawing_area();
    root.fill(&WHITE)?;
    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption("Order book mid price", ("sans-serif", 28))
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(0..frames.max(1), (lo - pad)..(hi + pad))?;
    chart.configure_mesh().x_desc("Frame").y_desc("Mid").draw()?;
    chart.draw_series(vec![PathElement::new(mids, BLUE.stroke_width(2))])?;

    println!("Chart saved to order_book_mid.svg");
    Ok(())
}
