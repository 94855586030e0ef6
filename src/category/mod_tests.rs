use std::collections::HashSet;
use std::path::{Path, PathBuf};

use proptest::prelude::*;

use super::*;

fn paths(names: &[&str]) -> Vec<PathBuf> {
    names.iter().map(PathBuf::from).collect()
}

#[test]
fn classify_routes_each_kind() {
    let classification = classify(paths(&[
        "puppet.pp",
        "puppet_template.epp",
        "ruby.rb",
        "ruby_template.erb",
        "yaml.yaml",
        "yaml.yml",
        "json.json",
        "Puppetfile",
        "Modulefile",
        "foobarbaz",
    ]));

    assert_eq!(classification.files(Category::Manifest), paths(&["puppet.pp"]));
    assert_eq!(
        classification.files(Category::Template),
        paths(&["puppet_template.epp"])
    );
    assert_eq!(classification.files(Category::Script), paths(&["ruby.rb"]));
    assert_eq!(
        classification.files(Category::ScriptTemplate),
        paths(&["ruby_template.erb"])
    );
    assert_eq!(
        classification.files(Category::DataYaml),
        paths(&["yaml.yaml", "yaml.yml"])
    );
    assert_eq!(classification.files(Category::DataJson), paths(&["json.json"]));
    assert_eq!(
        classification.files(Category::DependencyDescriptor),
        paths(&["Puppetfile", "Modulefile"])
    );
    assert_eq!(classification.unrecognized(), paths(&["foobarbaz"]));
}

#[test]
fn dependency_descriptors_have_no_extension() {
    for name in ["Puppetfile", "Modulefile", "Rakefile", "Gemfile", "dir/Puppetfile"] {
        assert!(
            Category::DependencyDescriptor.matches(Path::new(name)),
            "{name} should be a dependency descriptor"
        );
    }
    assert!(!Category::DependencyDescriptor.matches(Path::new("Makefile")));
    assert!(!Category::DependencyDescriptor.matches(Path::new("Puppetfile.lock")));
}

#[test]
fn extension_precedence_beats_basename() {
    let classification = classify(paths(&["Gemfile.rb"]));

    // Matches the script extension before the descriptor basename is tried.
    assert_eq!(classification.files(Category::Script), paths(&["Gemfile.rb"]));
    assert!(classification.files(Category::DependencyDescriptor).is_empty());
}

#[test]
fn yaml_extension_is_case_sensitive() {
    let classification = classify(paths(&["a.YAML", "b.Yml", "c.yml"]));

    assert_eq!(classification.files(Category::DataYaml), paths(&["c.yml"]));
    assert_eq!(classification.unrecognized(), paths(&["a.YAML", "b.Yml"]));
}

#[test]
fn dotfile_without_extension_is_unrecognized() {
    let classification = classify(paths(&[".pp", "manifests/.json"]));

    assert_eq!(classification.unrecognized().len(), 2);
}

#[test]
fn checked_skips_empty_categories_and_keeps_order() {
    let classification = classify(paths(&["z.json", "a.pp", "README"]));

    let order: Vec<Category> = classification.checked().map(|(c, _)| c).collect();
    assert_eq!(order, vec![Category::Manifest, Category::DataJson]);
}

#[test]
fn empty_input_classifies_to_nothing() {
    let classification = classify(Vec::new());

    assert!(classification.is_empty());
    assert_eq!(classification.len(), 0);
    assert_eq!(classification.checked().count(), 0);
}

#[test]
fn category_indexes_match_all_order() {
    for (i, category) in Category::ALL.into_iter().enumerate() {
        assert_eq!(category.index(), i);
    }
    assert_eq!(&Category::ALL[..7], &Category::CHECKED[..]);
}

fn file_name_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z]{1,6}\\.(pp|epp|rb|erb|yaml|yml|json|txt|md|YAML)",
        "(Puppet|Module|Rake|Gem|Make)file",
        "[a-z]{1,6}",
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn classification_is_a_strict_partition(
        names in proptest::collection::hash_set(
            ("[a-z]{1,4}", file_name_strategy()).prop_map(|(dir, name)| format!("{dir}/{name}")),
            0..40,
        )
    ) {
        let input: Vec<PathBuf> = names.iter().map(PathBuf::from).collect();
        let classification = classify(input.clone());

        prop_assert_eq!(classification.len(), input.len());

        let mut seen = HashSet::new();
        for category in Category::ALL {
            for file in classification.files(category) {
                prop_assert!(seen.insert(file.clone()), "{} appears twice", file.display());
            }
        }
        let expected: HashSet<PathBuf> = input.into_iter().collect();
        prop_assert_eq!(seen, expected);
    }

    #[test]
    fn every_file_sits_in_its_first_matching_category(name in file_name_strategy()) {
        let path = PathBuf::from(&name);
        let classification = classify(vec![path.clone()]);

        let expected = Category::ALL
            .into_iter()
            .find(|c| c.matches(&path))
            .unwrap();
        prop_assert_eq!(classification.files(expected), std::slice::from_ref(&path));
    }
}
