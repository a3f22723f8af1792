use std::collections::HashMap;

use super::schema_node::{ScalarKind, SchemaNode};

const BASIC_EXAMPLE: &str = r#"basic:
  name: John Doe
  address: Los Angeles, CA
  email: johndoe@example.com
  phone: 555-123-4567
  websites:
      - https://linkedin.com/johndoe
      - https://github.com/johndoe"#;

const OBJECTIVE_EXAMPLE: &str =
    "objective: A Software Engineer with over 8 years of experience...";

const EDUCATION_EXAMPLE: &str = r#"education:
  - school: University of California, Berkeley
    degrees:
      - names:
          - B.S. Computer Science
  - school: Stanford University
    degrees:
      - names:
          - M.S. Computer Science"#;

const EXPERIENCES_EXAMPLE: &str = r#"experiences:
  - company: Tech Innovators Inc.
    location: San Francisco, CA
    titles:
      - name: Lead Software Engineer
        startdate: 2022
        enddate: 2024
    highlights:
      - Led the development of a cloud-based platform, increasing user engagement by 50%.
      - Implemented a microservices architecture, reducing system downtime by 30%.
      - Mentored a team of junior developers, fostering a culture of continuous learning and improvement.
      - Spearheaded the integration of AI-driven features, enhancing product capabilities and user satisfaction."#;

const SKILLS_EXAMPLE: &str = r#"skills:
  - category: Technical
    skills:
      - JavaScript
      - Python
      - AWS
      - Docker
      - Kubernetes
      - React
      - Node.js
      - Microservices
      - CI/CD
      - SQL
      - NoSQL
      - REST APIs
  - category: Non-technical
    skills:
      - Strong problem-solving skills
      - Excellent communication
      - Team leadership
      - Project management
      - Agile methodologies"#;

/// Static description of the expected resume shape plus the example
/// snippets rendered alongside diagnostics.
///
/// Purely data: read-only lookups, no mutation, no failure modes.
#[derive(Debug, Clone)]
pub struct ResumeSchema {
    root: SchemaNode,
    examples: HashMap<&'static str, &'static str>,
}

impl ResumeSchema {
    /// Build the standard resume schema
    pub fn standard() -> Self {
        let root = SchemaNode::mapping(vec![
            ("editing", SchemaNode::scalar(ScalarKind::Boolean)),
            ("debug", SchemaNode::scalar(ScalarKind::Boolean)),
            (
                "basic",
                SchemaNode::mapping(vec![
                    ("name", SchemaNode::scalar(ScalarKind::String)),
                    ("address", SchemaNode::scalar(ScalarKind::String)),
                    ("email", SchemaNode::scalar(ScalarKind::String)),
                    ("phone", SchemaNode::scalar(ScalarKind::String)),
                    (
                        "websites",
                        SchemaNode::sequence_of(SchemaNode::scalar(ScalarKind::String)),
                    ),
                ]),
            ),
            ("objective", SchemaNode::scalar(ScalarKind::String)),
            (
                "education",
                SchemaNode::sequence_of(SchemaNode::mapping(vec![
                    ("school", SchemaNode::scalar(ScalarKind::String)),
                    (
                        "degrees",
                        SchemaNode::sequence_of(SchemaNode::mapping(vec![(
                            "names",
                            SchemaNode::sequence_of(SchemaNode::scalar(ScalarKind::String)),
                        )])),
                    ),
                ])),
            ),
            (
                "experiences",
                SchemaNode::sequence_of(SchemaNode::mapping(vec![
                    ("company", SchemaNode::scalar(ScalarKind::String)),
                    ("location", SchemaNode::scalar(ScalarKind::String)),
                    (
                        "titles",
                        SchemaNode::sequence_of(SchemaNode::mapping(vec![
                            ("name", SchemaNode::scalar(ScalarKind::String)),
                            // dates appear both as plain years and as free text
                            (
                                "startdate",
                                SchemaNode::either(&[ScalarKind::Integer, ScalarKind::String]),
                            ),
                            (
                                "enddate",
                                SchemaNode::either(&[ScalarKind::Integer, ScalarKind::String]),
                            ),
                        ])),
                    ),
                    (
                        "highlights",
                        SchemaNode::sequence_of(SchemaNode::scalar(ScalarKind::String)),
                    ),
                ])),
            ),
            (
                "skills",
                SchemaNode::sequence_of(SchemaNode::mapping(vec![
                    ("category", SchemaNode::scalar(ScalarKind::String)),
                    (
                        "skills",
                        SchemaNode::sequence_of(SchemaNode::scalar(ScalarKind::String)),
                    ),
                ])),
            ),
        ]);

        // editing/debug are one-line booleans and carry no snippet
        let mut examples = HashMap::new();
        examples.insert("basic", BASIC_EXAMPLE);
        examples.insert("objective", OBJECTIVE_EXAMPLE);
        examples.insert("education", EDUCATION_EXAMPLE);
        examples.insert("experiences", EXPERIENCES_EXAMPLE);
        examples.insert("skills", SKILLS_EXAMPLE);

        Self { root, examples }
    }

    /// The root node of the expected shape
    pub fn root(&self) -> &SchemaNode {
        &self.root
    }

    /// Example snippet for a top-level section, if one is declared
    pub fn example_for(&self, section: &str) -> Option<&'static str> {
        self.examples.get(section).copied()
    }
}
