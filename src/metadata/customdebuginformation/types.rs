//! Custom debug information types for Portable PDB format.
//!
//! This module defines the kinds of custom debug information this crate recognises and the
//! structured values decoded from their blobs.

/// GUIDs of the well-known custom debug information kinds.
///
/// Values as published in the Portable PDB specification and emitted by the Roslyn compilers.
pub mod debug_guids {
    use uguid::{guid, Guid};

    /// State Machine Hoisted Local Scopes: 6DA9A61E-F8C7-4874-BE62-68BC5630DF71
    pub const STATE_MACHINE_HOISTED_LOCAL_SCOPES: Guid =
        guid!("6da9a61e-f8c7-4874-be62-68bc5630df71");
    /// Dynamic Local Variables: 83C563C4-B4F3-47D5-B824-BA5441477EA8
    pub const DYNAMIC_LOCAL_VARIABLES: Guid = guid!("83c563c4-b4f3-47d5-b824-ba5441477ea8");
    /// Default Namespace: 58B2EAB6-209F-4E4E-A22C-B2D0F910C782
    pub const DEFAULT_NAMESPACE: Guid = guid!("58b2eab6-209f-4e4e-a22c-b2d0f910c782");
    /// Edit and Continue Local Slot Map: 755F52A8-91C5-45BE-B4B8-209571E552BD
    pub const ENC_LOCAL_SLOT_MAP: Guid = guid!("755f52a8-91c5-45be-b4b8-209571e552bd");
    /// Edit and Continue Lambda and Closure Map: A643004C-0240-496F-A783-30D64F4979DE
    pub const ENC_LAMBDA_AND_CLOSURE_MAP: Guid = guid!("a643004c-0240-496f-a783-30d64f4979de");
    /// Tuple Element Names: ED9FDF71-8879-4747-8ED3-FE5EDE3CE710
    pub const TUPLE_ELEMENT_NAMES: Guid = guid!("ed9fdf71-8879-4747-8ed3-fe5ede3ce710");
    /// Embedded Source: 0E8A571B-6926-466E-B4AD-8AB04611F5FE
    pub const EMBEDDED_SOURCE: Guid = guid!("0e8a571b-6926-466e-b4ad-8ab04611f5fe");
    /// Source Link: CC110556-A091-4D38-9FEC-25AB9A351A6A
    pub const SOURCE_LINK: Guid = guid!("cc110556-a091-4d38-9fec-25ab9a351a6a");
    /// Compilation Metadata References: 7E4D4708-096E-4C5C-AEDA-CB10BA6A740D
    pub const COMPILATION_METADATA_REFERENCES: Guid =
        guid!("7e4d4708-096e-4c5c-aeda-cb10ba6a740d");
    /// Compilation Options: B5FEEC05-8CD0-4A83-96DA-466284BB4BD8
    pub const COMPILATION_OPTIONS: Guid = guid!("b5feec05-8cd0-4a83-96da-466284bb4bd8");
}

/// Well-known custom debug information kinds identified by GUID.
///
/// The kind determines the format and interpretation of the associated blob data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CustomDebugKind {
    /// Scopes of locals hoisted into state machine fields
    StateMachineHoistedLocalScopes,

    /// Which parts of a local's type were declared `dynamic`
    DynamicLocalVariables,

    /// VB default namespace of the module
    DefaultNamespace,

    /// Edit and Continue local slot map
    EncLocalSlotMap,

    /// Edit and Continue lambda and closure map
    EncLambdaAndClosureMap,

    /// Element names of tuple types used in a local's type
    TupleElementNames,

    /// Embedded source file content
    EmbeddedSource,

    /// Source Link information for source file mapping
    SourceLink,

    /// References used by the compilation
    CompilationMetadataReferences,

    /// Options used by the compiler
    CompilationOptions,

    /// Unknown or unsupported debug information kind
    Unknown(uguid::Guid),
}

impl CustomDebugKind {
    /// Classify a kind GUID.
    #[must_use]
    pub fn from_guid(guid: uguid::Guid) -> Self {
        match guid {
            debug_guids::STATE_MACHINE_HOISTED_LOCAL_SCOPES => {
                CustomDebugKind::StateMachineHoistedLocalScopes
            }
            debug_guids::DYNAMIC_LOCAL_VARIABLES => CustomDebugKind::DynamicLocalVariables,
            debug_guids::DEFAULT_NAMESPACE => CustomDebugKind::DefaultNamespace,
            debug_guids::ENC_LOCAL_SLOT_MAP => CustomDebugKind::EncLocalSlotMap,
            debug_guids::ENC_LAMBDA_AND_CLOSURE_MAP => CustomDebugKind::EncLambdaAndClosureMap,
            debug_guids::TUPLE_ELEMENT_NAMES => CustomDebugKind::TupleElementNames,
            debug_guids::EMBEDDED_SOURCE => CustomDebugKind::EmbeddedSource,
            debug_guids::SOURCE_LINK => CustomDebugKind::SourceLink,
            debug_guids::COMPILATION_METADATA_REFERENCES => {
                CustomDebugKind::CompilationMetadataReferences
            }
            debug_guids::COMPILATION_OPTIONS => CustomDebugKind::CompilationOptions,
            other => CustomDebugKind::Unknown(other),
        }
    }

    /// The GUID identifying this kind.
    #[must_use]
    pub fn guid(&self) -> uguid::Guid {
        match self {
            CustomDebugKind::StateMachineHoistedLocalScopes => {
                debug_guids::STATE_MACHINE_HOISTED_LOCAL_SCOPES
            }
            CustomDebugKind::DynamicLocalVariables => debug_guids::DYNAMIC_LOCAL_VARIABLES,
            CustomDebugKind::DefaultNamespace => debug_guids::DEFAULT_NAMESPACE,
            CustomDebugKind::EncLocalSlotMap => debug_guids::ENC_LOCAL_SLOT_MAP,
            CustomDebugKind::EncLambdaAndClosureMap => debug_guids::ENC_LAMBDA_AND_CLOSURE_MAP,
            CustomDebugKind::TupleElementNames => debug_guids::TUPLE_ELEMENT_NAMES,
            CustomDebugKind::EmbeddedSource => debug_guids::EMBEDDED_SOURCE,
            CustomDebugKind::SourceLink => debug_guids::SOURCE_LINK,
            CustomDebugKind::CompilationMetadataReferences => {
                debug_guids::COMPILATION_METADATA_REFERENCES
            }
            CustomDebugKind::CompilationOptions => debug_guids::COMPILATION_OPTIONS,
            CustomDebugKind::Unknown(guid) => *guid,
        }
    }
}

/// Represents parsed custom debug information from a debug blob.
///
/// Kinds without a structured decoder are kept as [`CustomDebugInfo::Raw`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CustomDebugInfo {
    /// Tuple element names of a local's type, in depth-first order of the tuple types.
    /// `None` marks an element without an explicit name.
    TupleElementNames {
        /// Element names
        names: Vec<Option<String>>,
    },

    /// Per-type-node `dynamic` flags of a local's type, in depth-first order.
    DynamicLocalVariables {
        /// One flag per bit of the blob, least significant bit first
        flags: Vec<bool>,
    },

    /// Source Link mapping information
    SourceLink {
        /// JSON document with source server mappings
        document: String,
    },

    /// Information this crate does not decode
    Raw {
        /// The debug information kind
        kind: CustomDebugKind,
        /// Raw blob data
        data: Vec<u8>,
    },
}

impl CustomDebugInfo {
    /// Get the debug information kind for this data.
    #[must_use]
    pub fn kind(&self) -> CustomDebugKind {
        match self {
            CustomDebugInfo::TupleElementNames { .. } => CustomDebugKind::TupleElementNames,
            CustomDebugInfo::DynamicLocalVariables { .. } => CustomDebugKind::DynamicLocalVariables,
            CustomDebugInfo::SourceLink { .. } => CustomDebugKind::SourceLink,
            CustomDebugInfo::Raw { kind, .. } => *kind,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tuple_element_names_guid_layout() {
        // On-disk GUID layout: first three groups little-endian
        let expected = [
            0x71, 0xDF, 0x9F, 0xED, 0x79, 0x88, 0x47, 0x47, 0x8E, 0xD3, 0xFE, 0x5E, 0xDE, 0x3C,
            0xE7, 0x10,
        ];
        assert_eq!(debug_guids::TUPLE_ELEMENT_NAMES.to_bytes(), expected);
        assert_eq!(
            CustomDebugKind::from_guid(uguid::Guid::from_bytes(expected)),
            CustomDebugKind::TupleElementNames
        );
    }

    #[test]
    fn dynamic_local_variables_guid_layout() {
        let expected = [
            0xC4, 0x63, 0xC5, 0x83, 0xF3, 0xB4, 0xD5, 0x47, 0xB8, 0x24, 0xBA, 0x54, 0x41, 0x47,
            0x7E, 0xA8,
        ];
        assert_eq!(debug_guids::DYNAMIC_LOCAL_VARIABLES.to_bytes(), expected);
        assert_eq!(
            CustomDebugKind::from_guid(uguid::Guid::from_bytes(expected)),
            CustomDebugKind::DynamicLocalVariables
        );
    }

    #[test]
    fn kind_guid_roundtrip() {
        let kinds = [
            CustomDebugKind::StateMachineHoistedLocalScopes,
            CustomDebugKind::DynamicLocalVariables,
            CustomDebugKind::DefaultNamespace,
            CustomDebugKind::EncLocalSlotMap,
            CustomDebugKind::EncLambdaAndClosureMap,
            CustomDebugKind::TupleElementNames,
            CustomDebugKind::EmbeddedSource,
            CustomDebugKind::SourceLink,
            CustomDebugKind::CompilationMetadataReferences,
            CustomDebugKind::CompilationOptions,
        ];

        for kind in kinds {
            assert_eq!(CustomDebugKind::from_guid(kind.guid()), kind);
        }
    }

    #[test]
    fn unknown_kind() {
        let guid = uguid::guid!("00010203-0405-0607-0809-0a0b0c0d0e0f");
        let kind = CustomDebugKind::from_guid(guid);
        assert_eq!(kind, CustomDebugKind::Unknown(guid));
        assert_eq!(kind.guid(), guid);
    }

    #[test]
    fn info_kind() {
        let info = CustomDebugInfo::DynamicLocalVariables { flags: vec![true] };
        assert_eq!(info.kind(), CustomDebugKind::DynamicLocalVariables);

        let raw = CustomDebugInfo::Raw {
            kind: CustomDebugKind::EmbeddedSource,
            data: vec![1, 2, 3],
        };
        assert_eq!(raw.kind(), CustomDebugKind::EmbeddedSource);
    }
}
