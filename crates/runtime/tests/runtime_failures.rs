use rook_runtime::{Error, ErrorKind, RuntimeSettings, prelude::*};
use rook_test_utils::*;
use std::sync::{Arc, Mutex};

mod runtime {
    use super::*;

    fn runtime_with_abort_log() -> (Runtime, Arc<Mutex<Vec<String>>>) {
        let log = Arc::new(Mutex::new(Vec::new()));
        let runtime = Runtime::with_settings(RuntimeSettings {
            abort_callback: Some(Box::new({
                let log = log.clone();
                move |error: &Error| log.lock().unwrap().push(error.to_string())
            })),
            ..Default::default()
        });
        (runtime, log)
    }

    #[test]
    fn aborts_are_reported_with_the_builtin_name() {
        let (runtime, log) = runtime_with_abort_log();

        let result = runtime.call("pop", vec![RValue::from(int_vector::<i64>(&[]))]);
        assert!(result.is_err());

        assert_eq!(*log.lock().unwrap(), ["pop: empty vector"]);
    }

    #[test]
    fn successful_calls_are_not_reported() {
        let (runtime, log) = runtime_with_abort_log();
        call_with_runtime(&runtime, "length", &["abc".into()]);
        assert!(log.lock().unwrap().is_empty());
    }

    #[test]
    fn unknown_builtin() {
        let (runtime, log) = runtime_with_abort_log();
        let error = runtime.call("print", Vec::<RValue>::new()).unwrap_err();
        assert_eq!(error.kind(), &ErrorKind::UnknownBuiltin("print".into()));
        assert_eq!(log.lock().unwrap().len(), 1);
    }

    #[test]
    fn wrong_argument_types() {
        let error = call_fails("push", &[1.into(), 2.into()]);
        assert_eq!(
            error.to_string(),
            "push: expected arguments |Vector, Any|, but found (Int, Int)"
        );
    }

    #[test]
    fn too_many_arguments() {
        let error = call_fails("pop", &[int_vector(&[1]).into(), 1.into()]);
        assert!(matches!(error.kind(), ErrorKind::TypeMismatch { .. }));
    }

    #[test]
    fn failed_assertion() {
        let error = call_fails("assert", &[0.into()]);
        assert_eq!(error.kind(), &ErrorKind::AssertionFailed);
        check_call("assert", &[1.into()], ());
    }

    #[test]
    fn reserve_limit_is_configurable() {
        let runtime = Runtime::with_settings(RuntimeSettings {
            max_reserve_capacity: 4,
            ..Default::default()
        });

        assert!(runtime.call("vector_reserve", vec![RValue::Int(4)]).is_ok());
        let error = runtime.call("vector_reserve", vec![RValue::Int(5)]).unwrap_err();
        assert!(matches!(error.kind(), ErrorKind::RangeError(_)));
    }

    #[test]
    fn builtins_can_be_added_to_the_prelude() {
        let mut runtime = Runtime::default();
        let mut extra = Module::new();
        extra.add_fn("double", |ctx| match ctx.take_args::<1>("|Int|")? {
            [RValue::Int(n)] => Ok(RValue::Int(n * 2).into()),
            unexpected => unexpected_args("|Int|", &unexpected),
        });
        runtime.prelude_mut().extend(&extra);

        let result = call_with_runtime(&runtime, "double", &[21.into()]);
        assert_eq!(result.into_first(), RValue::Int(42));
    }
}
