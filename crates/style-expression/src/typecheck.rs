//! Overload resolution: matches a lambda node's already-parsed
//! children against the operator's declared signatures and fixes the
//! node's result type.

use crate::error::CompileError;
use crate::expression::Expression;
use crate::parser::ParsingContext;
use crate::types::{OperatorDefinition, Param, Signature, Type};

/// Selects the declared overload whose parameter slots match the
/// children's types positionally and returns the operator's result
/// type. When no overload matches, returns one rejection reason per
/// declared signature.
pub fn resolve_overload(
    def: &OperatorDefinition,
    args: &[Expression],
    ctx: &ParsingContext,
) -> Result<Type, Vec<CompileError>> {
    for signature in &def.signatures {
        if match_signature(signature, args).is_ok() {
            return Ok(def.result.clone());
        }
    }
    let errors: Vec<CompileError> = def
        .signatures
        .iter()
        .filter_map(|signature| match_signature(signature, args).err())
        .map(|reason| CompileError::new(format!("\"{}\": {}", def.name, reason), ctx.key()))
        .collect();
    debug_assert!(!errors.is_empty());
    Err(errors)
}

fn match_signature(signature: &Signature, args: &[Expression]) -> Result<(), String> {
    let mut next = 0;
    for param in signature {
        match param {
            Param::Single(want) => {
                let arg = args.get(next).ok_or_else(|| {
                    format!(
                        "expected {} arguments, but found {} instead",
                        arity(signature),
                        args.len()
                    )
                })?;
                let found = arg.result_type();
                if !is_compatible(want, found) {
                    return Err(format!(
                        "expected {} for argument {}, but found {} instead",
                        want,
                        next + 1,
                        found
                    ));
                }
                next += 1;
            }
            Param::NArgs { ty, max } => {
                let rest = &args[next..];
                if let Some(max) = max {
                    if rest.len() > *max {
                        return Err(format!(
                            "expected at most {} trailing arguments of type {}, but found {} instead",
                            max,
                            ty,
                            rest.len()
                        ));
                    }
                }
                for (offset, arg) in rest.iter().enumerate() {
                    let found = arg.result_type();
                    if !is_compatible(ty, found) {
                        return Err(format!(
                            "expected {} for argument {}, but found {} instead",
                            ty,
                            next + offset + 1,
                            found
                        ));
                    }
                }
                next = args.len();
            }
        }
    }
    if next < args.len() {
        return Err(format!(
            "expected {} arguments, but found {} instead",
            arity(signature),
            args.len()
        ));
    }
    Ok(())
}

fn arity(signature: &Signature) -> String {
    let required = signature
        .iter()
        .filter(|p| matches!(p, Param::Single(_)))
        .count();
    if signature.iter().any(|p| matches!(p, Param::NArgs { .. })) {
        format!("at least {}", required)
    } else {
        required.to_string()
    }
}

/// Type-level compatibility for signature matching. The top type
/// `Value` on either side matches anything (permission to proceed,
/// not coercion: runtime tag checks still apply). Array slots match
/// covariantly on item type, and on length only when the slot
/// constrains it. Everything else requires canonical-name equality.
pub fn is_compatible(want: &Type, found: &Type) -> bool {
    if matches!(want, Type::Value | Type::Typename(_)) || matches!(found, Type::Value) {
        return true;
    }
    if let (Type::Array(want_item, want_len), Type::Array(found_item, found_len)) = (want, found) {
        let item_ok = is_compatible(want_item, found_item);
        let len_ok = want_len.is_none() || want_len == found_len;
        return item_ok && len_ok;
    }
    want == found
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn top_type_matches_either_way() {
        assert!(is_compatible(&Type::Value, &Type::Number));
        assert!(is_compatible(&Type::Number, &Type::Value));
        assert!(!is_compatible(&Type::Number, &Type::String));
    }

    #[test]
    fn array_slots_match_covariantly() {
        let bare = Type::array(Type::Value);
        let numbers3 = Type::fixed_array(Type::Number, 3);
        assert!(is_compatible(&bare, &numbers3));
        assert!(!is_compatible(&numbers3, &Type::fixed_array(Type::Number, 4)));
        assert!(is_compatible(
            &Type::array(Type::Number),
            &Type::fixed_array(Type::Number, 4)
        ));
        assert!(!is_compatible(
            &Type::array(Type::Number),
            &Type::fixed_array(Type::String, 4)
        ));
    }

    #[test]
    fn typename_placeholder_matches_any_argument() {
        assert!(is_compatible(&Type::Typename("T".into()), &Type::Color));
    }
}
