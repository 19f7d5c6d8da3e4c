use rook_runtime::{Error, prelude::*};

/// Calls a builtin with a default runtime, panicking if the call fails
///
/// The builtin receives clones of the arguments.
pub fn call(name: &str, args: &[RValue]) -> Returns {
    call_with_runtime(&Runtime::default(), name, args)
}

/// Calls a builtin with the provided runtime, panicking if the call fails
pub fn call_with_runtime(runtime: &Runtime, name: &str, args: &[RValue]) -> Returns {
    match runtime.call(name, args.to_vec()) {
        Ok(result) => result,
        Err(error) => panic!("unexpected error while calling '{name}': {error}"),
    }
}

/// Calls a builtin and checks that its first return value matches the expected value
pub fn check_call(name: &str, args: &[RValue], expected: impl Into<RValue>) {
    let expected = expected.into();
    let result = call(name, args).into_first();
    assert_eq!(result, expected, "unexpected result from '{name}'");
}

/// Calls a builtin that's expected to fail, returning the error
pub fn call_fails(name: &str, args: &[RValue]) -> Error {
    match Runtime::default().call(name, args.to_vec()) {
        Ok(result) => panic!("'{name}' didn't fail as expected, result: {result:?}"),
        Err(error) => error,
    }
}
