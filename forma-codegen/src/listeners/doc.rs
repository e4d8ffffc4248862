//! Documentation decorator.

use forma_core::lcfirst;
use forma_ir::{DocBlock, TypeHint};

use crate::{Error, GenerationEvent, Listener, Result};

/// Length of the accessor verb prefix (`get` / `set`).
const ACCESSOR_PREFIX_LEN: usize = 3;

/// Display name of the property an accessor refers to.
///
/// Strips a fixed three-character prefix and lower-cases the next character:
/// `getFirstName` → `firstName`. Names that do not follow the convention are
/// not rejected; `fetchName` yields `chName`.
pub fn accessed_property_name(method_name: &str) -> String {
    let rest: String = method_name.chars().skip(ACCESSOR_PREFIX_LEN).collect();
    lcfirst(&rest)
}

/// Attaches doc blocks to generated properties and accessors.
///
/// - property: `@var mixed`
/// - getter: `Return <name>` and `@return mixed`
/// - setter: `Set <name>` and `@param <type> $<name>`
#[derive(Debug, Clone, Copy, Default)]
pub struct DocListener;

impl DocListener {
    pub const NAME: &'static str = "doc";
}

impl Listener for DocListener {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn on_generate_property(&self, event: &mut GenerationEvent<'_>) -> Result<()> {
        let phase = event.phase();
        let prop = event.property_mut().ok_or_else(|| {
            Error::invariant(Self::NAME, phase, "expected a property node")
        })?;

        prop.set_doc(DocBlock::new().tag("var", TypeHint::UNSPECIFIED));
        Ok(())
    }

    fn on_generate_getter(&self, event: &mut GenerationEvent<'_>) -> Result<()> {
        let phase = event.phase();
        let method = event.method_mut().ok_or_else(|| {
            Error::invariant(Self::NAME, phase, "expected a method node")
        })?;

        let property = accessed_property_name(&method.name);
        method.set_doc(
            DocBlock::new()
                .summary(format!("Return {property}"))
                .tag("return", TypeHint::UNSPECIFIED),
        );
        Ok(())
    }

    fn on_generate_setter(&self, event: &mut GenerationEvent<'_>) -> Result<()> {
        let phase = event.phase();
        let method = event.method_mut().ok_or_else(|| {
            Error::invariant(Self::NAME, phase, "expected a method node")
        })?;

        let Some(param) = method.setter_param() else {
            return Err(Error::invariant(
                Self::NAME,
                phase,
                format!(
                    "setter '{}' takes {} parameters instead of exactly one",
                    method.name,
                    method.params().len()
                ),
            ));
        };

        let doc = DocBlock::new()
            .summary(format!("Set {}", param.name))
            .tag("param", format!("{} ${}", param.ty, param.name));
        method.set_doc(doc);
        Ok(())
    }
}
