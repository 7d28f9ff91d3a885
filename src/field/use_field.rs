//! Stock accessor providers.
//!
//! `#[cgp_getter]` implements the generated getter provider trait for both
//! of these types:
//!
//! | Provider | Reads |
//! |----------|-------|
//! | `UseFields` | the field named after each getter method |
//! | `UseField<Tag>` | the field tagged `Tag` (single-method getters) |

use core::marker::PhantomData;

/// Reads every getter from the field with the same name as the method.
#[derive(Debug, Clone, Copy, Default)]
pub struct UseFields;

/// Reads a getter from the field tagged `Tag`.
pub struct UseField<Tag>(pub PhantomData<Tag>);

impl<Tag> Default for UseField<Tag> {
    fn default() -> Self {
        UseField(PhantomData)
    }
}
