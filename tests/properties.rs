use std::cell::Cell;

use lazyseq::prelude::*;
use proptest::collection::vec;
use proptest::prelude::*;

fn drain<V>(mut seq: impl Sequence<V>) -> Vec<V> {
    let mut out = Vec::new();
    seq.for_each(|v| out.push(v));
    out
}

proptest! {
    #[test]
    fn map_matches_elementwise_application(xs in vec(any::<i64>(), 0..64)) {
        let calls = Cell::new(0_usize);
        let mapped = drain(map(values(xs.clone()), |x: i64| {
            calls.set(calls.get() + 1);
            x.wrapping_mul(3)
        }));
        let want: Vec<i64> = xs.iter().map(|x| x.wrapping_mul(3)).collect();
        prop_assert_eq!(mapped, want);
        prop_assert_eq!(calls.get(), xs.len());
    }

    #[test]
    fn map_stops_with_the_consumer(xs in vec(any::<u16>(), 1..64), stop in 0_usize..64) {
        let stop = stop % xs.len();
        let calls = Cell::new(0_usize);
        let mut seen = 0_usize;
        map(values(xs.clone()), |x: u16| {
            calls.set(calls.get() + 1);
            x
        })
        .drive(&mut |_: u16| {
            seen += 1;
            seen <= stop
        });
        prop_assert_eq!(seen, stop + 1);
        prop_assert_eq!(calls.get(), stop + 1);
    }

    #[test]
    fn all_counts_calls_up_to_first_failure(xs in vec(0_u8..4, 0..64)) {
        let calls = Cell::new(0_usize);
        let holds = all(values(xs.clone()), |x: u8| {
            calls.set(calls.get() + 1);
            x != 0
        });
        match xs.iter().position(|&x| x == 0) {
            Some(i) => {
                prop_assert!(!holds);
                prop_assert_eq!(calls.get(), i + 1);
            }
            None => {
                prop_assert!(holds);
                prop_assert_eq!(calls.get(), xs.len());
            }
        }
    }

    #[test]
    fn once_yields_its_value_exactly_once(x in any::<i32>()) {
        let mut seq = once(x);
        prop_assert_eq!(drain(&mut seq), vec![x]);
        prop_assert!(drain(&mut seq).is_empty());
    }

    #[test]
    fn single_resumes_where_consumption_stopped(xs in vec(any::<u32>(), 0..32), k in 0_usize..40) {
        let mut iter = single(values(xs.clone()));
        let head: Vec<u32> = iter.by_ref().take(k).collect();
        let rest = drain(iter.as_sequence());

        let split = k.min(xs.len());
        prop_assert_eq!(&head[..], &xs[..split]);
        prop_assert_eq!(&rest[..], &xs[split..]);
        prop_assert!(drain(iter.as_sequence()).is_empty());
    }
}

#[test]
fn concrete_scenarios() {
    assert_eq!(drain(map(values(vec![1, 2, 3]), |x: i32| 2 * x)), vec![2, 4, 6]);

    let calls = Cell::new(0);
    let holds = all(values(vec![1, 2, 3]), |x: i32| {
        calls.set(calls.get() + 1);
        x > 2
    });
    assert!(!holds);
    // 1 already fails x > 2
    assert_eq!(calls.get(), 1);

    calls.set(0);
    assert!(!all(values(vec![1, 2, 3]), |x: i32| {
        calls.set(calls.get() + 1);
        x != 2
    }));
    assert_eq!(calls.get(), 2);
}

#[test]
fn defer_scopes_cleanup_to_loop_body() {
    let cleaned = Cell::new(0);
    let mut inside = Vec::new();
    for () in defer(|| cleaned.set(cleaned.get() + 1)) {
        inside.push(cleaned.get());
    }
    assert_eq!(inside, vec![0]);
    assert_eq!(cleaned.get(), 1);
}
