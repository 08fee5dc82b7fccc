//! Delegation to [`DecodeSelf`](crate::DecodeSelf) and
//! [`DecodeIdentifier`](crate::DecodeIdentifier).

use crate::{Capability, DecodeError, DecodeErrorKind, Object, Slot, Value, trace};

/// Hands `source` to the target's own decoding.
///
/// Only called for shapes flagged `DECODE_SELF`; a slot that then does not
/// hand out the hook is reported as [`DecodeErrorKind::CapabilityAssertionFailed`].
pub(crate) fn decode_self(target: &mut dyn Slot, source: &Object) -> Result<(), DecodeError> {
    let shape = target.shape();
    let Some(hook) = target.as_decode_self() else {
        return Err(DecodeError::new(DecodeErrorKind::CapabilityAssertionFailed {
            shape,
            capability: Capability::DecodeSelf,
        }));
    };
    trace!("{shape} decodes itself from {} keys", source.len());
    hook.decode_self(source).map_err(|error| {
        DecodeError::new(DecodeErrorKind::DelegatedFailure {
            shape,
            capability: Capability::DecodeSelf,
            error,
        })
    })
}

/// Hands a scalar `source` whose type differs from the target's to the
/// target's identifier conversion.
pub(crate) fn decode_identifier(target: &mut dyn Slot, source: &Value) -> Result<(), DecodeError> {
    let shape = target.shape();
    let Some(hook) = target.as_decode_identifier() else {
        return Err(DecodeError::new(DecodeErrorKind::CapabilityAssertionFailed {
            shape,
            capability: Capability::DecodeIdentifier,
        }));
    };
    trace!("{shape} decodes identifier from {}", source.natural_type());
    hook.decode_identifier(source).map_err(|error| {
        DecodeError::new(DecodeErrorKind::DelegatedFailure {
            shape,
            capability: Capability::DecodeIdentifier,
            error,
        })
    })
}
