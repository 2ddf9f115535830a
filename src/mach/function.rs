/// A one-argument function of the catalogue.
#[derive(Clone, Copy)]
pub struct Function {
    name: &'static str,
    func: fn(f64) -> f64,
}

impl Function {
    pub const CATALOGUE: [Function; 18] = [
        Function::new("sqrt", f64::sqrt),
        Function::new("cbrt", f64::cbrt),
        Function::new("sin", f64::sin),
        Function::new("cos", f64::cos),
        Function::new("tan", f64::tan),
        Function::new("asin", f64::asin),
        Function::new("acos", f64::acos),
        Function::new("atan", f64::atan),
        Function::new("sinh", f64::sinh),
        Function::new("cosh", f64::cosh),
        Function::new("tanh", f64::tanh),
        Function::new("asinh", f64::asinh),
        Function::new("acosh", f64::acosh),
        Function::new("atanh", f64::atanh),
        Function::new("log", f64::ln),
        Function::new("log2", f64::log2),
        Function::new("log10", f64::log10),
        Function::new("exp", f64::exp),
    ];

    const fn new(name: &'static str, func: fn(f64) -> f64) -> Function {
        Function { name, func }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn call(&self, val: f64) -> f64 {
        (self.func)(val)
    }
}

impl std::fmt::Debug for Function {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Function({})", self.name)
    }
}

impl PartialEq for Function {
    fn eq(&self, other: &Function) -> bool {
        self.name == other.name
    }
}
