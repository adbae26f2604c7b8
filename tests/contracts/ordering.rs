//! Ordering contracts (ORDER-001 through ORDER-004)

use crate::common::*;

/// A tree with chains, diamonds and depth variety in one domain
fn layered_env() -> TestEnv {
    TestEnv::builder()
        .with_file("shared/app.js", &js_requiring(&["./views/list", "./models/user"]))
        .with_file("shared/views/list.js", &js_requiring(&["./item", "../models/user"]))
        .with_file("shared/views/item.js", &js_requiring(&["../lib/dom"]))
        .with_file("shared/models/user.js", &js_requiring(&["../lib/base"]))
        .with_file("shared/lib/dom.js", &js_requiring(&["./base"]))
        .with_file("shared/lib/base.js", EMPTY_JS)
        .with_file("shared/lib/extra/unused.js", EMPTY_JS)
        .build()
}

/// CONTRACT ORDER-001: every file is emitted after everything it requires
mod dependencies_first {
    use super::*;

    #[test]
    fn contract_requirements_precede_requirers() {
        let env = layered_env();
        let result = env.run(&["tree"]);
        assert!(result.success, "tree failed: {}", result.stderr);
        let order = result.section("shared");

        assert_before!(order, "shared/lib/base.js", "shared/lib/dom.js");
        assert_before!(order, "shared/lib/dom.js", "shared/views/item.js");
        assert_before!(order, "shared/views/item.js", "shared/views/list.js");
        assert_before!(order, "shared/lib/base.js", "shared/models/user.js");
        assert_before!(order, "shared/models/user.js", "shared/views/list.js");
        assert_before!(order, "shared/views/list.js", "shared/app.js");
        assert_before!(order, "shared/models/user.js", "shared/app.js");
    }
}

/// CONTRACT ORDER-002: every listed file appears exactly once
mod no_duplicates {
    use super::*;

    #[test]
    fn contract_each_file_listed_once() {
        let env = layered_env();
        let result = env.run(&["tree"]);
        assert!(result.success, "tree failed: {}", result.stderr);
        let order = result.section("shared");

        let mut unique = order.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), order.len(), "duplicates in:\n{}", order.join("\n"));
        assert_eq!(order.len(), 7);
    }
}

/// CONTRACT ORDER-003: the same tree always yields the same output
mod determinism {
    use super::*;

    #[test]
    fn contract_repeated_runs_are_identical() {
        let env = layered_env();
        let first = env.run(&["--json", "tree"]);
        let second = env.run(&["--json", "tree"]);
        assert!(first.success, "tree failed: {}", first.stderr);
        assert_eq!(first.stdout, second.stdout);
    }
}

/// CONTRACT ORDER-004: unrelated files at equal depth keep listing order
mod depth_ties {
    use super::*;

    #[test]
    fn contract_equal_depth_keeps_name_order() {
        let env = TestEnv::builder()
            .with_file("shared/b/two.js", EMPTY_JS)
            .with_file("shared/a/one.js", EMPTY_JS)
            .with_file("shared/a/zero.js", EMPTY_JS)
            .build();

        let result = env.run(&["tree"]);

        assert!(result.success, "tree failed: {}", result.stderr);
        assert_order!(
            env,
            result,
            "shared",
            ["shared/a/one.js", "shared/a/zero.js", "shared/b/two.js"]
        );
    }
}
