use rook_runtime::{ErrorKind, Result, prelude::*};
use rook_test_utils::*;

// A coroutine that counts the values it's resumed with, finishing after `limit` resumptions
struct Counter {
    received: Vec<RValue>,
    limit: usize,
}

impl RookResource for Counter {
    fn type_name(&self) -> &str {
        "Counter"
    }

    fn as_coroutine(&self) -> Option<&dyn Coroutine> {
        Some(self)
    }

    fn as_coroutine_mut(&mut self) -> Option<&mut dyn Coroutine> {
        Some(self)
    }
}

impl Coroutine for Counter {
    fn is_active(&self) -> bool {
        self.received.len() < self.limit
    }

    fn return_value(&self) -> RValue {
        self.received.last().cloned().unwrap_or_default()
    }

    fn resume(&mut self, value: RValue) -> Result<()> {
        if !self.is_active() {
            return runtime_error!("coroutine has finished");
        }
        self.received.push(value);
        Ok(())
    }
}

struct NotACoroutine;

impl RookResource for NotACoroutine {
    fn type_name(&self) -> &str {
        "NotACoroutine"
    }
}

mod coroutine {
    use super::*;

    fn counter(limit: usize) -> RResource {
        RResource::new(Counter {
            received: Vec::new(),
            limit,
        })
    }

    #[test]
    fn resume_forwards_values_to_the_host() {
        let co = counter(2);

        check_call("active", &[co.clone().into()], 1);
        check_call("resume", &[co.clone().into(), "first".into()], ());
        check_call("returnvalue", &[co.clone().into()], "first");
        check_call("resume", &[co.clone().into(), "second".into()], ());
        check_call("active", &[co.clone().into()], 0);

        let error = call_fails("resume", &[co.clone().into()]);
        assert_eq!(error.to_string(), "resume: coroutine has finished");
        assert_eq!(co.ref_count(), 1);
    }

    #[test]
    fn coroutine_that_is_being_resumed() {
        let co = counter(2);
        let _exclusive = co.try_borrow_mut().unwrap();

        for name in ["active", "returnvalue", "resume"] {
            let error = call_fails(name, &[co.clone().into()]);
            assert_eq!(error.kind(), &ErrorKind::AlreadyBorrowed);
        }
    }

    #[test]
    fn other_resources_are_rejected() {
        let r = RResource::new(NotACoroutine);
        let error = call_fails("active", &[r.into()]);
        assert_eq!(
            error.kind(),
            &ErrorKind::TypeMismatch {
                expected: "a coroutine".into(),
                found: "NotACoroutine".into(),
            }
        );

        let r = RResource::new(NotACoroutine);
        let error = call_fails("resume", &[r.into(), 1.into()]);
        assert!(matches!(error.kind(), ErrorKind::TypeMismatch { .. }));
    }
}
