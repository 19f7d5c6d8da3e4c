//! The core library for the Rook language

pub mod coroutine;
pub mod number;
pub mod rook;
pub mod string;
pub mod vector;

use crate::Module;

#[derive(Clone)]
#[allow(missing_docs)]
pub struct CoreLib {
    pub coroutine: Module,
    pub number: Module,
    pub rook: Module,
    pub string: Module,
    pub vector: Module,
}

impl CoreLib {
    /// The core lib builtins, merged into a single module that can be used as a runtime's prelude
    pub fn prelude(&self) -> Module {
        let mut result = Module::new();
        result.extend(&self.coroutine);
        result.extend(&self.number);
        result.extend(&self.rook);
        result.extend(&self.string);
        result.extend(&self.vector);
        result
    }
}

impl Default for CoreLib {
    fn default() -> Self {
        Self {
            coroutine: coroutine::make_module(),
            number: number::make_module(),
            rook: rook::make_module(),
            string: string::make_module(),
            vector: vector::make_module(),
        }
    }
}
