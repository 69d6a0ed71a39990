//! Concurrency and thread safety tests for langrv

use std::io::Cursor;
use std::sync::{Arc, Mutex};
use std::thread;

use langrv::{build_from_reader, make_builder, merge, score, Builder, Vector};

fn sample_lines(count: usize) -> Vec<String> {
    (0..count)
        .map(|i| format!("line {i}: the quick brown fox jumps over the lazy dog"))
        .collect()
}

#[test]
fn builder_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Builder>();
    assert_send_sync::<Vector>();
}

#[test]
fn concurrent_builds_share_one_builder() {
    let builder = Arc::new(make_builder(3, 2000, 42).unwrap());
    let expected = builder.build("shared builder text");

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let builder = Arc::clone(&builder);
            thread::spawn(move || builder.build("shared builder text"))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

#[test]
fn parallel_partitions_merge_to_serial_result() {
    let builder = Arc::new(make_builder(4, 1000, 7).unwrap());
    let lines = sample_lines(64);
    let serial = builder.build_lines(&lines);

    let total = Arc::new(Mutex::new(builder.zeros()));
    let handles: Vec<_> = lines
        .chunks(16)
        .map(|chunk| {
            let builder = Arc::clone(&builder);
            let total = Arc::clone(&total);
            let chunk = chunk.to_vec();
            thread::spawn(move || {
                let partial = builder.build_lines(&chunk);
                let mut guard = total.lock().unwrap();
                merge(&mut guard, &partial).unwrap();
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    let parallel = total.lock().unwrap().clone();
    assert_eq!(parallel, serial);
}

#[test]
fn concurrent_readers_per_thread() {
    let builder = Arc::new(make_builder(3, 500, 42).unwrap());
    let corpus = sample_lines(10).join("\n");
    let expected = builder.build_lines(sample_lines(10));

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let builder = Arc::clone(&builder);
            let corpus = corpus.clone();
            thread::spawn(move || build_from_reader(&builder, Cursor::new(corpus), true).unwrap())
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

#[test]
fn concurrent_scoring_is_consistent() {
    let builder = make_builder(3, 2000, 42).unwrap();
    let english = Arc::new(builder.build_lines(["the cat sat", "on the mat"]));
    let probe = Arc::new(builder.build("the cat"));
    let expected = score(&english, &probe).unwrap();

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let english = Arc::clone(&english);
            let probe = Arc::clone(&probe);
            thread::spawn(move || score(&english, &probe).unwrap())
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap().to_bits(), expected.to_bits());
    }
}
