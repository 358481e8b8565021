use paramfit_core::{Functional, FunctionError, ParametricFunction, Vector};

/// Binds `parameters` into `function` and evaluates `objective` on the result.
///
/// # Errors
///
/// Returns an error if binding fails or the objective cannot evaluate the
/// bound function.
pub fn evaluate<O, P>(objective: &O, function: &P, parameters: &Vector) -> Result<f64, FunctionError>
where
    O: Functional,
    P: ParametricFunction,
{
    let bound = function.bind(parameters)?;
    objective.value(&bound)
}
