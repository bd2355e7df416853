//! Literal template fragments.
//!
//! Fragments are concatenated verbatim, so their leading and trailing
//! newlines are part of the contract. User-prompt fragments contain
//! `{{...}}` tokens for a downstream templating engine; they are text here.

// ── System prompt ─────────────────────────────────────────────────────

pub const SYSTEM_HEADER: &str = r#"You are an expert in manual software testing. You are responsible for defining the test cases necessary to validate a specific requirement. These test cases must be written in English. Ensure to include test cases for error scenarios and invalid inputs where relevant.

You must provide the test cases in JSON format as an array with the following format:
  {
    "testCases": [
      {
        "name": "test case name","#;

pub const NATURE_SCHEMA_LINE: &str = "\n        \"nature\": \"test case nature\",";

pub const TYPE_SCHEMA_LINE: &str = "\n        \"type\": \"test case type\",";

/// Schema fields after `name`/`nature`/`type`, plus the test-step
/// cross-referencing convention.
pub const SYSTEM_SCHEMA_BODY: &str = r#"
        "description": "high-level description of the test case",
        "prerequisites": "test case prerequisites",
        "testSteps": [
          {
            "action": "first action",
            "expectedResult": "expected result of the first action"
          },
          {
            "action": "second action",
            "expectedResult": "expected result of the second action"
          },
          ...
        ]
      },
      ...
    ]
  }

A test step can reference another by designating it as "first test step" or "test step 1", "second test step" or "test step 2"...
"#;

/// Fixed type explanation used by the classic variant.
pub const STATIC_TYPE_BLOCK: &str = "
The \"type\" field must have one of the following values:
- \"compliance\": Testing adherence to standards or regulations
- \"correction\": Testing after a bug fix (to be used when the source of the requirement is set to \u{201c}defect\u{201d})
- \"evolution\": Testing of newly added functionalities
- \"regression\": Testing that no existing functionality is broken
- \"end-to-end\": Testing of the complete end-user flow
- \"partner\": Integration testing with an external system
";

/// Dataset instructions and the opening of the example, through the first
/// test case's `"nature"`. The example is fixed text: it shows `"nature"`
/// whatever the toggles say.
pub const DATASET_HEAD: &str = r#"
It is possible to parameterize actions and expected results using the syntax <parameter name>. In this case, the JSON must contain an additional "dataset" attribute that contains the values to use for the different test instantiations, for example:
  {
    "testCases": [
      {
        "name": "addition",
        "description": "addition test",
        "nature": "functional","#;

/// `"type"` line of the dataset example, only present in the classic variant.
pub const DATASET_TYPE_LINE: &str = "\n        \"type\": \"evolution\",";

pub const DATASET_TAIL: &str = r#"
        "prerequisites": "",
        "testSteps": [
          {
            "action": "enter values <arg1> and <arg2>, then click on Add",
            "expectedResult": "the displayed total must be <total>"
          }
        ],
        "dataset": [
          {
            "arg1": 1,
            "arg2": 2,
            "arg3": 3
          },
          {
            "arg1": 1,
            "arg2": -2,
            "arg3": -1
          }
        ]
      },
      {
        "name": "subtraction",
        "description": "subtraction test",
        "prerequisites": "",
        "testSteps": [
          {
            "index": 0,
            "action": "enter values <arg1> and <arg2>, then click on Subtract",
            "expectedResult": "the displayed total must be <total>"
          }
        ],
        "dataset": [
          {
            "arg1": 1,
            "arg2": 2,
            "arg3": -1
          },
          {
            "arg1": 1,
            "arg2": -2,
            "arg3": 3
          }
        ]
      }
    ]
  }"#;

pub const SYSTEM_FOOTER: &str =
    "\nYour response must contain nothing other than JSON! Do not use Markdown code blocks.";

// ── User prompt ───────────────────────────────────────────────────────

pub const USER_HEADER: &str = r#"## Requirement to be tested

{{#with requirement}}
The requirement is: "{{ name }}"

{{ description }}
"#;

pub const REFERENCE_LINE: &str = "Reference: {{reference}}\n";
pub const CATEGORY_LINE: &str = "Category: {{ category }}\n";
pub const NATURE_LINE: &str = "Nature: {{ nature }}\n";

/// Closes the main requirement and opens one related-requirement item.
pub const USER_RELATED_OPEN: &str = r#"{{/with}}

## Additional information

In order to understand the context of that requirement, you need to consider:

### Related requirements
{{#if providedRequirements}}
{{#each providedRequirements}}
- {{ inc @index }} - "{{ name }}"

{{description}}
"#;

/// Closes the related-requirement iteration and adds related documents.
pub const USER_RELATED_CLOSE: &str = r#"
{{/each}}
{{else}}
No related requirements provided.
{{/if}}

### Related documents
{{#if providedDocuments}}
{{#each providedDocuments}}
- {{ name }} {{! The user can manually add some information about the document here }}
{{/each}}
{{else}}
No related documents provided.
{{/if}}
"#;

pub const CATEGORY_DEFINITIONS_HEADING: &str = "\n## Definition of the requirement categories\n\n";

/// User prompt of the classic variant, every placeholder line present.
pub const CLASSIC_USER_TEMPLATE: &str = r#"## Requirement to be tested

{{#with requirement}}
The requirement is: "{{ name }}"

{{ description }}

Reference: {{reference}}
Category: {{ category }}
Nature: {{ nature }}
{{/with}}

## Additional information

In order to understand the context of that requirement, you need to consider:

### Related requirements
{{#if providedRequirements}}
{{#each providedRequirements}}
- {{ inc @index }} - "{{ name }}"

{{description}}

Reference: {{reference}}
Category: {{ category }}
Nature: {{ nature }}

{{/each}}
{{else}}
No related requirements provided.
{{/if}}

### Related documents
{{#if providedDocuments}}
{{#each providedDocuments}}
- {{ name }} {{! The user can manually add some information about the document here }}
{{/each}}
{{else}}
No related documents provided.
{{/if}}
"#;
