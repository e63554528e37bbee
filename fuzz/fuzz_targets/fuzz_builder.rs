#![no_main]
use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use strbuilder::{Error, StringBuilder};

/// One step of a fuzzed construction sequence.
#[derive(Arbitrary, Debug)]
enum Op {
    Push(u8),
    PushAll(Vec<u8>),
    Remove { start: u8, stop: u8 },
    Clear,
    Snapshot,
}

// Drive the builder with an arbitrary op tape and check it against a plain
// `Vec<u8>` model after every step: same contents, same length, terminator
// slot still reserved, and removals accepted or rejected exactly when the
// model says so.
fuzz_target!(|input: (u8, Vec<Op>)| {
    let (initial, ops) = input;
    let mut builder = StringBuilder::with_capacity(usize::from(initial)).unwrap();
    let mut model: Vec<u8> = Vec::new();

    for op in ops {
        match op {
            Op::Push(unit) => {
                builder.push(unit).unwrap();
                model.push(unit);
            }
            Op::PushAll(units) => {
                builder.push_all(&units).unwrap();
                model.extend_from_slice(&units);
            }
            Op::Remove { start, stop } => {
                let (start, stop) = (usize::from(start), usize::from(stop));
                match builder.remove(start, stop) {
                    Ok(()) => {
                        assert!(!model.is_empty() && start <= stop && stop < model.len());
                        model.drain(start..=stop);
                    }
                    Err(Error::Empty) => assert!(model.is_empty()),
                    Err(Error::OutOfRange { .. }) => {
                        assert!(!model.is_empty());
                        assert!(start > stop || stop >= model.len());
                    }
                    Err(err) => panic!("unexpected remove error: {err}"),
                }
            }
            Op::Clear => {
                builder.clear().unwrap();
                model.clear();
            }
            Op::Snapshot => {
                assert_eq!(builder.result_as_copy().unwrap(), model);
            }
        }

        assert_eq!(builder.len(), model.len());
        if builder.capacity() > 0 {
            assert!(builder.capacity() >= builder.len() + 1);
        }
    }

    assert_eq!(builder.result().unwrap(), model.as_slice());
});
