//! Rebuilds the concrete wrapper type from a handle's runtime tags.
//!
//! The mapping is a fixed 24-entry table over the (base type, subtype) cross
//! product, built once and never mutated, so a missing combination is a
//! structural gap rather than a forgotten branch.

use crate::base::{BaseType, BoolKind, FloatKind, GeogKind, GeomKind, IntKind, TextKind};
use crate::error::{ClassificationError, Error, LookupError};
use crate::handle::THandle;
use crate::temp::{Temporal, Type};
use crate::tinst::TInst;
use crate::tiset::TInstSet;
use crate::tseq::TSeq;
use crate::tsset::TSet;

type Ctor = fn(THandle) -> Box<dyn Temporal>;

static MAPPER: [((BaseType, Type), Ctor); 24] = [
    ((BaseType::Bool, Type::Instant), TInst::<BoolKind>::boxed),
    ((BaseType::Bool, Type::InstantSet), TInstSet::<BoolKind>::boxed),
    ((BaseType::Bool, Type::Sequence), TSeq::<BoolKind>::boxed),
    ((BaseType::Bool, Type::SequenceSet), TSet::<BoolKind>::boxed),
    ((BaseType::Int, Type::Instant), TInst::<IntKind>::boxed),
    ((BaseType::Int, Type::InstantSet), TInstSet::<IntKind>::boxed),
    ((BaseType::Int, Type::Sequence), TSeq::<IntKind>::boxed),
    ((BaseType::Int, Type::SequenceSet), TSet::<IntKind>::boxed),
    ((BaseType::Float, Type::Instant), TInst::<FloatKind>::boxed),
    ((BaseType::Float, Type::InstantSet), TInstSet::<FloatKind>::boxed),
    ((BaseType::Float, Type::Sequence), TSeq::<FloatKind>::boxed),
    ((BaseType::Float, Type::SequenceSet), TSet::<FloatKind>::boxed),
    ((BaseType::Text, Type::Instant), TInst::<TextKind>::boxed),
    ((BaseType::Text, Type::InstantSet), TInstSet::<TextKind>::boxed),
    ((BaseType::Text, Type::Sequence), TSeq::<TextKind>::boxed),
    ((BaseType::Text, Type::SequenceSet), TSet::<TextKind>::boxed),
    ((BaseType::GeomPoint, Type::Instant), TInst::<GeomKind>::boxed),
    ((BaseType::GeomPoint, Type::InstantSet), TInstSet::<GeomKind>::boxed),
    ((BaseType::GeomPoint, Type::Sequence), TSeq::<GeomKind>::boxed),
    ((BaseType::GeomPoint, Type::SequenceSet), TSet::<GeomKind>::boxed),
    ((BaseType::GeogPoint, Type::Instant), TInst::<GeogKind>::boxed),
    ((BaseType::GeogPoint, Type::InstantSet), TInstSet::<GeogKind>::boxed),
    ((BaseType::GeogPoint, Type::Sequence), TSeq::<GeogKind>::boxed),
    ((BaseType::GeogPoint, Type::SequenceSet), TSet::<GeogKind>::boxed),
];

/// Reads the two tag codes off `handle`. Unknown codes fail; they are never
/// coerced to a default variant.
pub fn classify(handle: &THandle) -> Result<(BaseType, Type), ClassificationError> {
    let base = BaseType::from_code(handle.temptype())?;
    let sub = Type::from_code(handle.subtype())?;
    Ok((base, sub))
}

/// Builds the wrapper matching `handle`'s tags. A `None` handle is the
/// engine's "found nothing" result and propagates as `Ok(None)`.
pub fn create(handle: Option<THandle>) -> Result<Option<Box<dyn Temporal>>, Error> {
    let Some(handle) = handle else {
        return Ok(None);
    };
    let (base, sub) = classify(&handle)?;
    let ctor = MAPPER
        .iter()
        .find(|(key, _)| *key == (base, sub))
        .map(|(_, ctor)| *ctor)
        .ok_or(LookupError { base, sub })?;
    Ok(Some(ctor(handle)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClassificationError;
    use crate::handle;
    use crate::tinst::*;
    use crate::tiset::*;
    use crate::tseq::*;
    use crate::tsset::*;

    macro_rules! assert_creates {
        ($temptype:expr, $subtype:expr, $ty:ty) => {{
            let t = create(Some(THandle::new($temptype, $subtype)))
                .unwrap()
                .unwrap();
            assert!(
                t.as_any().is::<$ty>(),
                "({}, {}) should map to {}",
                $temptype,
                $subtype,
                stringify!($ty)
            );
        }};
    }

    #[test]
    fn test_create_null_handle() {
        assert!(create(None).unwrap().is_none());
    }

    #[test]
    fn test_create_all_combinations() {
        assert_creates!(handle::T_TBOOL, handle::TINSTANT, TBoolInst);
        assert_creates!(handle::T_TBOOL, handle::TINSTANTSET, TBoolInstSet);
        assert_creates!(handle::T_TBOOL, handle::TSEQUENCE, TBoolSeq);
        assert_creates!(handle::T_TBOOL, handle::TSEQUENCESET, TBoolSeqSet);
        assert_creates!(handle::T_TINT, handle::TINSTANT, TIntInst);
        assert_creates!(handle::T_TINT, handle::TINSTANTSET, TIntInstSet);
        assert_creates!(handle::T_TINT, handle::TSEQUENCE, TIntSeq);
        assert_creates!(handle::T_TINT, handle::TSEQUENCESET, TIntSeqSet);
        assert_creates!(handle::T_TFLOAT, handle::TINSTANT, TFloatInst);
        assert_creates!(handle::T_TFLOAT, handle::TINSTANTSET, TFloatInstSet);
        assert_creates!(handle::T_TFLOAT, handle::TSEQUENCE, TFloatSeq);
        assert_creates!(handle::T_TFLOAT, handle::TSEQUENCESET, TFloatSeqSet);
        assert_creates!(handle::T_TTEXT, handle::TINSTANT, TTextInst);
        assert_creates!(handle::T_TTEXT, handle::TINSTANTSET, TTextInstSet);
        assert_creates!(handle::T_TTEXT, handle::TSEQUENCE, TTextSeq);
        assert_creates!(handle::T_TTEXT, handle::TSEQUENCESET, TTextSeqSet);
        assert_creates!(handle::T_TGEOMPOINT, handle::TINSTANT, TGeomPointInst);
        assert_creates!(handle::T_TGEOMPOINT, handle::TINSTANTSET, TGeomPointInstSet);
        assert_creates!(handle::T_TGEOMPOINT, handle::TSEQUENCE, TGeomPointSeq);
        assert_creates!(handle::T_TGEOMPOINT, handle::TSEQUENCESET, TGeomPointSeqSet);
        assert_creates!(handle::T_TGEOGPOINT, handle::TINSTANT, TGeogPointInst);
        assert_creates!(handle::T_TGEOGPOINT, handle::TINSTANTSET, TGeogPointInstSet);
        assert_creates!(handle::T_TGEOGPOINT, handle::TSEQUENCE, TGeogPointSeq);
        assert_creates!(handle::T_TGEOGPOINT, handle::TSEQUENCESET, TGeogPointSeqSet);
    }

    #[test]
    fn test_mapper_covers_cross_product() {
        let bases = [
            BaseType::Bool,
            BaseType::Int,
            BaseType::Float,
            BaseType::Text,
            BaseType::GeomPoint,
            BaseType::GeogPoint,
        ];
        let subs = [
            Type::Instant,
            Type::InstantSet,
            Type::Sequence,
            Type::SequenceSet,
        ];
        for base in bases {
            for sub in subs {
                assert!(
                    MAPPER.iter().any(|(key, _)| *key == (base, sub)),
                    "missing ({base}, {sub})"
                );
            }
        }
        assert_eq!(MAPPER.len(), bases.len() * subs.len());
    }

    #[test]
    fn test_classify_rejects_unknown_codes() {
        let err = classify(&THandle::new(0, handle::TINSTANT)).unwrap_err();
        assert_eq!(err, ClassificationError::BaseType(0));

        let err = classify(&THandle::new(handle::T_TBOOL, 5)).unwrap_err();
        assert_eq!(err, ClassificationError::SubType(5));

        // create propagates classification failures
        assert!(matches!(
            create(Some(THandle::new(99, 99))),
            Err(Error::Classification(_))
        ));
    }

    #[test]
    fn test_classify() {
        let (base, sub) = classify(&THandle::new(handle::T_TGEOGPOINT, handle::TSEQUENCESET)).unwrap();
        assert_eq!(base, BaseType::GeogPoint);
        assert_eq!(sub, Type::SequenceSet);
    }
}
