//! Benchmarks for the mailbox hot paths.

use criterion::{Criterion, criterion_group, criterion_main};
use spsc_mailbox::Mailbox;
use std::hint::black_box;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;

#[derive(Clone, Copy)]
#[expect(dead_code, reason = "payload is only moved, never inspected")]
struct Quote {
    price: f64,
    size: f64,
    sequence: u64,
}

fn bench_send_receive(c: &mut Criterion) {
    let mut mailbox = Mailbox::<u64>::new();
    let (mut tx, mut rx) = mailbox.split();

    c.bench_function("send_receive_u64", |b| {
        b.iter(|| {
            let accepted = tx.send(black_box(42)).is_ok();
            (accepted, rx.receive())
        });
    });
}

fn bench_send_receive_struct(c: &mut Criterion) {
    let mut mailbox = Mailbox::<Quote>::new();
    let (mut tx, mut rx) = mailbox.split();
    let quote = Quote {
        price: 100.25,
        size: 10.0,
        sequence: 1,
    };

    c.bench_function("send_receive_quote", |b| {
        b.iter(|| {
            let accepted = tx.send(black_box(quote)).is_ok();
            (accepted, rx.receive().is_ok())
        });
    });
}

fn bench_send_full(c: &mut Criterion) {
    let mut mailbox = Mailbox::<u64>::new();
    let (mut tx, _rx) = mailbox.split();
    let _accepted = tx.send(0).is_ok();

    c.bench_function("send_rejected_full", |b| {
        b.iter(|| tx.send(black_box(1)));
    });
}

fn bench_receive_empty(c: &mut Criterion) {
    let mut mailbox = Mailbox::<u64>::new();
    let (_tx, mut rx) = mailbox.split();

    c.bench_function("receive_empty", |b| {
        b.iter(|| rx.receive());
    });
}

fn bench_is_full(c: &mut Criterion) {
    let mailbox = Mailbox::<u64>::new();

    c.bench_function("is_full", |b| {
        b.iter(|| black_box(mailbox.is_full()));
    });
}

fn bench_cross_thread_ping_pong(c: &mut Criterion) {
    let mut ping = Mailbox::<u64>::new();
    let mut pong = Mailbox::<u64>::new();
    let (mut ping_tx, mut ping_rx) = ping.split();
    let (mut pong_tx, mut pong_rx) = pong.split();
    let stop = AtomicBool::new(false);

    thread::scope(|s| {
        let stop = &stop;

        s.spawn(move || {
            while !stop.load(Ordering::Relaxed) {
                if let Ok(value) = ping_rx.receive() {
                    while pong_tx.send(value).is_err() {
                        std::hint::spin_loop();
                    }
                }
                std::hint::spin_loop();
            }
        });

        c.bench_function("cross_thread_round_trip", |b| {
            b.iter(|| {
                while ping_tx.send(black_box(7)).is_err() {
                    std::hint::spin_loop();
                }
                loop {
                    if let Ok(value) = pong_rx.receive() {
                        break black_box(value);
                    }
                    std::hint::spin_loop();
                }
            });
        });

        stop.store(true, Ordering::Relaxed);
    });
}

criterion_group!(
    benches,
    bench_send_receive,
    bench_send_receive_struct,
    bench_send_full,
    bench_receive_empty,
    bench_is_full,
    bench_cross_thread_ping_pong,
);

criterion_main!(benches);
