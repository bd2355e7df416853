//! End-to-end composition scenarios over the public API.

use casegen::prelude::*;

/// Lines of the `"<field>"` explanation block in a system prompt.
fn explanation_lines<'a>(prompt: &'a str, field: &str) -> Vec<&'a str> {
    let heading = format!("The \"{field}\" field must have one of the following values:\n");
    let (_, rest) = prompt.split_once(&heading).expect("explanation heading");
    rest.lines().take_while(|l| l.starts_with("- \"")).collect()
}

fn main_requirement_block(user_prompt: &str) -> &str {
    let start = user_prompt.find("{{#with requirement}}").unwrap();
    let end = user_prompt.find("{{/with}}").unwrap();
    user_prompt.get(start..end).unwrap()
}

fn all_states() -> impl Iterator<Item = ConfiguratorState> {
    [Variant::Full, Variant::Classic].into_iter().flat_map(|variant| {
        ToggleState::combinations().map(move |toggles| ConfiguratorState::new(variant, toggles))
    })
}

// ── Determinism ──────────────────────────────────────────────────────

#[test]
fn every_combination_is_deterministic_and_non_empty() {
    for state in all_states() {
        let first = compose(&state);
        let second = compose(&state.clone());
        assert_eq!(first, second, "{state:?}");
        assert!(!first.system_prompt.is_empty());
        assert!(!first.user_prompt.is_empty());
    }
}

// ── Enumeration edits ────────────────────────────────────────────────

#[test]
fn disabling_atdd_leaves_six_nature_lines_in_default_order() {
    let toggles = ToggleState::all_off()
        .with(Toggle::Nature, true)
        .with(Toggle::Type, true);
    let mut state = ConfiguratorState::new(Variant::Full, toggles);
    let atdd = state.lists.find(ListName::Nature, "ATDD").unwrap();
    state.lists.set_enabled(ListName::Nature, atdd, false).unwrap();

    let prompts = compose(&state);
    let lines = explanation_lines(&prompts.system_prompt, "nature");
    assert_eq!(
        lines,
        [
            "- \"functional\": Testing of functionalities",
            "- \"business\": Testing of business rules and processes",
            "- \"user\": Testing from the user perspective",
            "- \"non functional\": Testing of a system's usability and reliability",
            "- \"performance\": Testing response time and system capacity",
            "- \"security\": Testing of protection against vulnerabilities and unauthorized access",
        ]
    );
}

#[test]
fn disabling_an_entry_removes_exactly_its_line() {
    for list in [ListName::Nature, ListName::Type] {
        let state = ConfiguratorState::default();
        let before = compose(&state);
        let before_lines = explanation_lines(&before.system_prompt, list.as_str());

        for index in 0..state.lists.get(list).len() {
            let mut edited = state.clone();
            edited.lists.set_enabled(list, index, false).unwrap();
            let after = compose(&edited);
            let after_lines = explanation_lines(&after.system_prompt, list.as_str());

            let mut expected = before_lines.clone();
            expected.remove(index);
            assert_eq!(after_lines, expected, "{list}[{index}]");
        }
    }
}

#[test]
fn editing_a_description_changes_only_that_line() {
    let state = ConfiguratorState::default();
    let mut edited = state.clone();
    edited
        .lists
        .set_description(ListName::Type, 2, "New features")
        .unwrap();

    let before = compose(&state).system_prompt;
    let after = compose(&edited).system_prompt;

    let changed: Vec<(&str, &str)> = before
        .lines()
        .zip(after.lines())
        .filter(|(a, b)| a != b)
        .collect();
    assert_eq!(
        changed,
        [(
            "- \"evolution\": Testing of newly added functionalities",
            "- \"evolution\": New features"
        )]
    );
    assert_eq!(before.lines().count(), after.lines().count());
}

#[test]
fn category_edits_reach_only_the_user_prompt() {
    let state = ConfiguratorState::default();
    let mut edited = state.clone();
    edited.lists.set_enabled(ListName::Category, 5, false).unwrap();

    let before = compose(&state);
    let after = compose(&edited);
    assert_eq!(before.system_prompt, after.system_prompt);
    assert!(before.user_prompt.contains("- \"regulatory\":"));
    assert!(!after.user_prompt.contains("- \"regulatory\":"));
}

// ── Toggles ──────────────────────────────────────────────────────────

#[test]
fn all_off_keeps_fixed_sections() {
    let prompts = compose(&ConfiguratorState::new(Variant::Full, ToggleState::all_off()));

    let system = &prompts.system_prompt;
    assert!(system.starts_with("You are an expert in manual software testing."));
    assert!(system.contains("\"testSteps\": ["));
    assert!(system.contains("A test step can reference another"));
    assert!(system.ends_with("Do not use Markdown code blocks."));
    assert!(!system.contains("must have one of the following values"));

    let user = &prompts.user_prompt;
    assert!(user.starts_with("## Requirement to be tested"));
    assert!(user.contains("### Related requirements"));
    assert!(user.contains("No related requirements provided."));
    assert!(user.contains("### Related documents"));
    assert!(user.contains("No related documents provided."));
}

#[test]
fn classic_all_off_still_explains_types() {
    let prompts = compose(&ConfiguratorState::new(
        Variant::Classic,
        ToggleState::all_off(),
    ));
    assert_eq!(explanation_lines(&prompts.system_prompt, "type").len(), 6);
}

#[test]
fn dataset_round_trip_is_byte_identical() {
    let mut configurator = Configurator::new(ConfiguratorState::new(
        Variant::Full,
        ToggleState::all_on().with(Toggle::Dataset, false),
    ));
    let before = configurator.prompts().system_prompt.clone();

    let with_dataset = configurator.set_toggle(Toggle::Dataset, true).clone();
    assert_ne!(with_dataset.system_prompt, before);
    assert!(with_dataset.system_prompt.contains("\"dataset\": ["));

    let after = configurator.set_toggle(Toggle::Dataset, false);
    assert_eq!(after.system_prompt, before);
}

#[test]
fn references_and_category_without_nature() {
    let toggles = ToggleState::all_off()
        .with(Toggle::References, true)
        .with(Toggle::Category, true);
    let prompts = compose(&ConfiguratorState::new(Variant::Full, toggles));

    let block = main_requirement_block(&prompts.user_prompt);
    let reference = block.find("Reference: {{reference}}").unwrap();
    let category = block.find("Category: {{ category }}").unwrap();
    assert!(reference < category);
    assert!(!block.contains("Nature:"));
}

#[test]
fn one_toggle_drives_main_and_related_lines() {
    for toggles in ToggleState::combinations() {
        let prompts = compose(&ConfiguratorState::new(Variant::Full, toggles));
        let user = &prompts.user_prompt;
        for (on, line) in [
            (toggles.references, "Reference: {{reference}}"),
            (toggles.category, "Category: {{ category }}"),
            (toggles.nature, "Nature: {{ nature }}"),
        ] {
            let expected = if on { 2 } else { 0 };
            assert_eq!(user.matches(line).count(), expected, "{toggles:?}");
        }
    }
}

// ── Template tokens ──────────────────────────────────────────────────

#[test]
fn template_tokens_are_left_verbatim() {
    let user = compose(&ConfiguratorState::default()).user_prompt;
    for token in [
        "{{#with requirement}}",
        "{{ name }}",
        "{{#if providedRequirements}}",
        "{{#each providedRequirements}}",
        "{{ inc @index }}",
        "{{else}}",
        "{{/if}}",
        "{{/each}}",
        "{{! The user can manually add some information about the document here }}",
    ] {
        assert!(user.contains(token), "missing {token}");
    }
}

// ── Variants ─────────────────────────────────────────────────────────

#[test]
fn classic_sections_keep_page_order() {
    let prompts = compose(&ConfiguratorState::new(Variant::Classic, ToggleState::all_on()));
    let system = &prompts.system_prompt;
    let nature = system.find("The \"nature\" field").unwrap();
    let ty = system.find("The \"type\" field").unwrap();
    let dataset = system.find("It is possible to parameterize").unwrap();
    assert!(nature < ty && ty < dataset);
}

#[test]
fn full_and_classic_agree_when_type_list_is_untouched() {
    // Defaults of the type list reproduce the classic static explanation.
    let toggles = ToggleState::all_on().with(Toggle::Dataset, false);
    let full = compose(&ConfiguratorState::new(Variant::Full, toggles));
    let classic = compose(&ConfiguratorState::new(Variant::Classic, toggles));
    assert_eq!(full.system_prompt, classic.system_prompt);
}
