use rook_runtime::{ErrorKind, prelude::*};
use rook_test_utils::*;

mod random {
    use super::*;
    use test_case::test_case;

    fn seeded_runtime(seed: u64) -> Runtime {
        let mut runtime = Runtime::default();
        runtime
            .prelude_mut()
            .extend(&rook_random::make_module(Some(seed)));
        runtime
    }

    fn rnd(runtime: &Runtime, max: i64) -> i64 {
        match call_with_runtime(runtime, "rnd", &[max.into()]).into_first() {
            RValue::Int(n) => n,
            other => panic!("expected an Int, found {other:?}"),
        }
    }

    #[test_case(1)]
    #[test_case(10)]
    #[test_case(1000)]
    fn rnd_stays_in_range(max: i64) {
        let runtime = seeded_runtime(42);
        for _ in 0..100 {
            let n = rnd(&runtime, max);
            assert!((0..max).contains(&n));
        }
    }

    #[test_case(0)]
    #[test_case(-5)]
    fn rnd_with_a_non_positive_max_returns_zero(max: i64) {
        let runtime = seeded_runtime(42);
        assert_eq!(rnd(&runtime, max), 0);
    }

    #[test]
    fn rnd_on_vectors() {
        let runtime = seeded_runtime(1);
        let maxes = int_vector(&[1, 5, 100]);
        let RValue::Vector(result) =
            call_with_runtime(&runtime, "rnd", &[maxes.into()]).into_first()
        else {
            panic!("expected a vector");
        };

        assert_eq!(result.kind(), ElementKind::Int);
        let values = ints(&result);
        assert_eq!(values[0], 0);
        assert!((0..5).contains(&values[1]));
        assert!((0..100).contains(&values[2]));
    }

    #[test]
    fn rnd_on_a_vector_with_non_ints() {
        let runtime = seeded_runtime(1);
        let result = runtime.call("rnd", vec![RValue::from(vector(&[1.into(), 2.5.into()]))]);
        assert!(matches!(
            result.unwrap_err().kind(),
            ErrorKind::TypeMismatch { .. }
        ));
    }

    #[test]
    fn rnd_on_a_vector_that_is_being_modified() {
        let runtime = seeded_runtime(1);
        let maxes = int_vector(&[10, 20]);
        let _exclusive = maxes.data_mut();

        let result = runtime.call("rnd", vec![RValue::from(maxes.clone())]);
        assert_eq!(result.unwrap_err().kind(), &ErrorKind::AlreadyBorrowed);
    }

    #[test]
    fn rndfloat_stays_in_range() {
        let runtime = seeded_runtime(7);
        for _ in 0..100 {
            match call_with_runtime(&runtime, "rndfloat", &[]).into_first() {
                RValue::Float(x) => assert!((0.0..1.0).contains(&x)),
                other => panic!("expected a Float, found {other:?}"),
            }
        }
    }

    #[test]
    fn rndseed_makes_sequences_repeatable() {
        let runtime = seeded_runtime(0);

        call_with_runtime(&runtime, "rndseed", &[123.into()]);
        let first = (0..10).map(|_| rnd(&runtime, 1 << 30)).collect::<Vec<_>>();

        call_with_runtime(&runtime, "rndseed", &[123.into()]);
        let second = (0..10).map(|_| rnd(&runtime, 1 << 30)).collect::<Vec<_>>();

        assert_eq!(first, second);
    }

    #[test]
    fn modules_have_independent_generators() {
        let a = seeded_runtime(99);
        let b = seeded_runtime(99);

        // Advancing one generator doesn't affect the other
        rnd(&a, 10);
        let from_a = (0..5).map(|_| rnd(&a, 1 << 30)).collect::<Vec<_>>();
        rnd(&b, 10);
        let from_b = (0..5).map(|_| rnd(&b, 1 << 30)).collect::<Vec<_>>();

        assert_eq!(from_a, from_b);
    }
}
