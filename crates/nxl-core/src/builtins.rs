use std::collections::HashMap;

use crate::new_error;
use crate::object::{Builtin, NULL, Object};

fn check_arity(args: &[Object], want: usize) -> Option<Object> {
    if args.len() != want {
        return Some(new_error!(
            "wrong number of arguments. got={}, want={}",
            args.len(),
            want
        ));
    }
    None
}

/// Print the rendering of a single argument to stdout.
pub fn print(args: &[Object]) -> Object {
    if let Some(err) = check_arity(args, 1) {
        return err;
    }
    println!("{}", args[0].render());
    NULL.clone()
}

/// Return the kind tag of a single argument as a String object.
pub fn type_of(args: &[Object]) -> Object {
    if let Some(err) = check_arity(args, 1) {
        return err;
    }
    Object::string(args[0].kind().as_str())
}

/// All builtins keyed by the name they are exposed under.
pub fn registry() -> HashMap<&'static str, Builtin> {
    [Builtin::new("print", print), Builtin::new("typeof", type_of)]
        .into_iter()
        .map(|b| (b.name(), b))
        .collect()
}
