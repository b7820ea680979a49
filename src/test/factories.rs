//! Populated debug tables shared by unit tests.

use crate::{
    metadata::{
        customdebuginformation::debug_guids,
        handles::MethodHandle,
        pdb::{PdbMetadata, PdbMetadataBuilder},
    },
    test::SequencePointsBlob,
};

/// Method with sequence points in two documents, two scopes and custom debug information.
pub fn sample_method() -> MethodHandle {
    MethodHandle::new(1).unwrap()
}

/// Method without any debug information.
pub fn bare_method() -> MethodHandle {
    MethodHandle::new(2).unwrap()
}

/// Debug tables for [`sample_method`]:
///
/// - sequence points at IL 0 and 6 in `/src/Sample.cs`, IL 12 in `/src/Generated.cs`, then
///   a hidden point at IL 14
/// - scope `[0, 20)` declaring `values` (slot 0) and `pair` (slot 1)
/// - scope `[6, 12)` declaring `inner` (slot 1) and `flag` (slot 2)
/// - tuple names `Key`, unnamed on `pair`; dynamic flags `0x03` on `values`
pub fn sample_metadata() -> PdbMetadata {
    let mut builder = PdbMetadataBuilder::new();
    let sample = builder.document("/src/Sample.cs").unwrap();
    let generated = builder.document("/src/Generated.cs").unwrap();

    let blob = SequencePointsBlob::new(Some(sample.rid()))
        .point(0, 10, 5, 10, 20)
        .point(6, 11, 9, 12, 10)
        .document(generated.rid())
        .point(12, 3, 1, 3, 8)
        .hidden(14)
        .build();
    builder.method_debug_information(sample_method(), None, &blob);

    let outer = builder
        .local_scope(sample_method(), 0, 20, &[(0, "values"), (1, "pair")])
        .unwrap();
    builder
        .local_scope(sample_method(), 6, 6, &[(1, "inner"), (2, "flag")])
        .unwrap();

    builder
        .custom_debug_information(
            outer.variables[1].token(),
            Some(debug_guids::TUPLE_ELEMENT_NAMES),
            b"Key\0\0",
        )
        .unwrap();
    builder
        .custom_debug_information(
            outer.variables[0].token(),
            Some(debug_guids::DYNAMIC_LOCAL_VARIABLES),
            &[0x03],
        )
        .unwrap();

    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        debuginfo::{DebugInfoConfig, DebugInfoProvider, PortableDebugInfoProvider},
        metadata::accessor::MetadataAccessor,
    };

    #[test]
    fn sample_is_consistent() {
        let metadata = sample_metadata();
        assert_eq!(metadata.sequence_points(sample_method()).unwrap().len(), 4);
        assert_eq!(metadata.local_scopes(sample_method()).unwrap().len(), 2);
        assert!(metadata.local_scopes(bare_method()).unwrap().is_empty());
    }

    #[test]
    fn sample_through_provider() {
        let provider = PortableDebugInfoProvider::new(sample_metadata(), DebugInfoConfig::default());

        let points = provider.sequence_points(sample_method()).unwrap();
        let urls: Vec<_> = points.iter().map(|p| p.document_url.as_str()).collect();
        assert_eq!(
            urls,
            vec![
                "/src/Sample.cs",
                "/src/Sample.cs",
                "/src/Generated.cs",
                "/src/Generated.cs"
            ]
        );
        assert!(points[3].is_hidden());

        assert_eq!(
            provider.try_get_name(sample_method(), 1).unwrap().as_deref(),
            Some("pair")
        );

        let pair = provider
            .try_get_extra_type_info(sample_method(), 1)
            .unwrap()
            .unwrap();
        assert_eq!(
            pair.tuple_element_names(),
            Some(&[Some("Key".to_string()), None][..])
        );
        assert_eq!(pair.dynamic_flags(), None);

        let values = provider
            .try_get_extra_type_info(sample_method(), 0)
            .unwrap()
            .unwrap();
        assert_eq!(values.tuple_element_names(), None);
        assert_eq!(values.dynamic_flags().unwrap()[..2], [true, true]);

        assert_eq!(
            provider.try_get_extra_type_info(sample_method(), 2).unwrap(),
            None
        );
        assert!(provider.sequence_points(bare_method()).unwrap().is_empty());
    }
}
