//! Property tests for directive text parsing.

use std::path::Path;

use proptest::prelude::*;

use loadorder::{Directive, DirectiveKind, DirectiveSyntax, LocalFs, SourceFile};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: parsing arbitrary text never panics and validity implies a target.
    #[test]
    fn property_parse_never_panics(text in ".{0,80}") {
        let owner = SourceFile::open(&LocalFs::new(), "/nowhere/app/shared/owner.js");
        let directive = Directive::parse(&owner, &text, Path::new("/nowhere/app"));

        if directive.is_valid() {
            prop_assert_eq!(directive.kind(), DirectiveKind::Require);
            prop_assert!(directive.target().is_some());
        }
        prop_assert_eq!(
            directive.participates(&DirectiveSyntax::default()),
            directive.is_valid()
        );
    }

    /// PROPERTY: relative require targets stay absolute, normalised and keep the owner's extension.
    #[test]
    fn property_relative_targets_are_normalised(
        ups in 0usize..3,
        segments in proptest::collection::vec("[a-z]{1,6}", 1..4),
    ) {
        let owner = SourceFile::open(&LocalFs::new(), "/nowhere/app/shared/deep/owner.coffee");
        let raw = format!("require ./{}{}", "../".repeat(ups), segments.join("/"));
        let directive = Directive::parse(&owner, &raw, Path::new("/nowhere/app"));

        let target = directive.target().unwrap();
        prop_assert!(target.is_absolute());
        prop_assert!(!target.components().any(|c| matches!(
            c,
            std::path::Component::CurDir | std::path::Component::ParentDir
        )));
        prop_assert_eq!(target.extension().and_then(|e| e.to_str()), Some("coffee"));
    }
}
