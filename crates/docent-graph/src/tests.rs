//! Scenario tests for the graph builder

#[cfg(test)]
mod tests {
    use crate::{AmbiguityPolicy, GraphBuilder, GraphConfig, GraphError};
    use docent_domain::{Document, DocumentType};

    fn doc(id: &str, title: &str, doc_type: DocumentType, content: &str) -> Document {
        Document::new(id, title, content).with_type(doc_type)
    }

    #[test]
    fn test_setup_scenario() {
        let docs = vec![
            doc("setup/README.md", "Getting Started", DocumentType::SetupGuide, "Welcome."),
            doc("setup/guide.md", "Guide", DocumentType::Guide, "see also:\n- setup/README"),
        ];

        let corpus = GraphBuilder::default().build(docs).unwrap();

        let guide = corpus.resolve("setup/guide.md").unwrap();
        assert_eq!(guide.relationships.see_also, vec!["setup/README"]);

        let readme = corpus.resolve("setup/README.md").unwrap();
        assert!(readme.relationships.follow_ups.contains(&"setup/guide".to_string()));
        assert!(readme.relationships.see_also.is_empty());
    }

    #[test]
    fn test_dependents_recorded_once() {
        let docs = vec![
            doc("guides/a.md", "A", DocumentType::Guide, "[b](b.md) again [b](./b.md) and [b][ref]\n\n[ref]: /guides/b.md"),
            doc("guides/b.md", "B", DocumentType::Guide, "Nothing here."),
        ];

        let corpus = GraphBuilder::new(GraphConfig::explicit_only()).build(docs).unwrap();
        let b = corpus.resolve("guides/b").unwrap();
        assert_eq!(b.relationships.dependents, vec!["guides/a.md"]);
        assert_eq!(corpus.stats().dependent_edges, 1);
    }

    #[test]
    fn test_every_resolvable_link_has_reverse_edge() {
        let docs = vec![
            doc("x/one.md", "One", DocumentType::Documentation, "[two](two.md) [three](../y/three.md)"),
            doc("x/two.md", "Two", DocumentType::Documentation, "[three](/y/three.md) [missing](nope.md)"),
            doc("y/three.md", "Three", DocumentType::Documentation, "[one](../x/one.md)"),
        ];

        let corpus = GraphBuilder::default().build(docs).unwrap();

        for source in corpus.documents() {
            for link in &source.links.internal {
                if let Some(target) = corpus.resolve(link) {
                    if target.id != source.id {
                        let count = target
                            .relationships
                            .dependents
                            .iter()
                            .filter(|d| **d == source.id)
                            .count();
                        assert_eq!(count, 1, "{} -> {}", source.id, target.id);
                    }
                }
            }
        }
        assert_eq!(corpus.stats().dangling_references, 1);
    }

    #[test]
    fn test_self_links_are_not_dependents() {
        let docs = vec![doc("a/self.md", "Self", DocumentType::Guide, "[me](self.md)")];
        let corpus = GraphBuilder::default().build(docs).unwrap();
        assert!(corpus.documents()[0].relationships.dependents.is_empty());
    }

    #[test]
    fn test_explicit_prerequisites_survive_inference() {
        let docs = vec![
            doc("ops/install.md", "Install", DocumentType::SetupGuide, ""),
            doc(
                "ops/deploy.md",
                "Deploy",
                DocumentType::Guide,
                "Before deploying, read these.\n\n## Prerequisites\n- ops/network\n- ops/dns\n",
            ),
        ];

        let corpus = GraphBuilder::default().build(docs).unwrap();
        let deploy = corpus.resolve("ops/deploy").unwrap();
        assert_eq!(deploy.relationships.prerequisites, vec!["ops/network", "ops/dns"]);
    }

    #[test]
    fn test_inferred_prerequisites_when_not_declared() {
        let docs = vec![
            doc("ops/install.md", "Install", DocumentType::SetupGuide, ""),
            doc("ops/deploy.md", "Deploy", DocumentType::Guide, "Before deploying, install."),
        ];

        let corpus = GraphBuilder::default().build(docs).unwrap();
        let deploy = corpus.resolve("ops/deploy").unwrap();
        assert_eq!(deploy.relationships.prerequisites, vec!["ops/install"]);
        assert_eq!(corpus.stats().inferred_edges, 2);
    }

    #[test]
    fn test_requirements_list_does_not_block_inference() {
        let docs = vec![
            doc("ops/install.md", "Install", DocumentType::SetupGuide, ""),
            doc(
                "ops/deploy.md",
                "Deploy",
                DocumentType::Guide,
                "Before you deploy, check the host.\n\n## Requirements\n- Docker 24 or newer\n- 4 GB of RAM\n",
            ),
        ];

        let corpus = GraphBuilder::default().build(docs).unwrap();
        let deploy = corpus.resolve("ops/deploy").unwrap();
        assert_eq!(deploy.relationships.prerequisites, vec!["ops/install"]);
    }

    #[test]
    fn test_relative_path_bullets_resolve() {
        let docs = vec![
            doc("setup/install.md", "Install", DocumentType::SetupGuide, ""),
            doc(
                "guides/deploy.md",
                "Deploy",
                DocumentType::Guide,
                "## Prerequisites\n- ../setup/install.md\n",
            ),
        ];

        let corpus = GraphBuilder::default().build(docs).unwrap();
        let deploy = corpus.resolve("guides/deploy").unwrap();
        assert_eq!(deploy.relationships.prerequisites, vec!["setup/install"]);
        let target = corpus.resolve(&deploy.relationships.prerequisites[0]).unwrap();
        assert_eq!(target.id, "setup/install.md");
    }

    #[test]
    fn test_explicit_only_config_skips_inference() {
        let docs = vec![
            doc("ops/install.md", "Install", DocumentType::SetupGuide, ""),
            doc("ops/deploy.md", "Deploy", DocumentType::Guide, "Before deploying, install."),
        ];

        let corpus = GraphBuilder::new(GraphConfig::explicit_only()).build(docs).unwrap();
        assert_eq!(corpus.stats().inferred_edges, 0);
        assert!(corpus.documents().iter().all(|d| d.relationships.follow_ups.is_empty()));
    }

    #[test]
    fn test_ambiguous_links_are_dropped() {
        let docs = vec![
            doc("a/api.md", "A", DocumentType::ApiDocs, ""),
            doc("b/api.md", "B", DocumentType::ApiDocs, ""),
            doc("c/index.md", "C", DocumentType::Documentation, "[api](/api)"),
        ];

        let corpus = GraphBuilder::default().build(docs.clone()).unwrap();
        assert!(corpus.documents().iter().all(|d| d.relationships.dependents.is_empty()));
        assert_eq!(corpus.stats().dangling_references, 1);

        let legacy = GraphBuilder::new(GraphConfig {
            ambiguity_policy: AmbiguityPolicy::FirstInCorpusOrder,
            ..GraphConfig::default()
        })
        .build(docs)
        .unwrap();
        assert_eq!(legacy.documents()[0].relationships.dependents, vec!["c/index.md"]);
    }

    #[test]
    fn test_duplicate_identifiers_rejected() {
        let docs = vec![
            doc("a.md", "A", DocumentType::Guide, ""),
            doc("a.md", "A again", DocumentType::Guide, ""),
        ];
        let result = GraphBuilder::default().build(docs);
        assert!(matches!(result, Err(GraphError::DuplicateDocument(id)) if id == "a.md"));
    }

    #[test]
    fn test_empty_identifier_rejected() {
        let docs = vec![doc("", "Nameless", DocumentType::Guide, "")];
        assert!(matches!(
            GraphBuilder::default().build(docs),
            Err(GraphError::EmptyIdentifier(0))
        ));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = GraphConfig {
            max_inferred_prerequisites: 0,
            max_inferred_follow_ups: 0,
            ..GraphConfig::default()
        };
        assert!(matches!(
            GraphBuilder::new(config).build(Vec::new()),
            Err(GraphError::Config(_))
        ));
    }

    #[test]
    fn test_categories_in_first_seen_order() {
        let docs = vec![
            doc("setup/a.md", "A", DocumentType::Guide, ""),
            doc("api/b.md", "B", DocumentType::Guide, ""),
            doc("setup/c.md", "C", DocumentType::Guide, ""),
            doc("README.md", "Readme", DocumentType::Documentation, ""),
        ];
        let corpus = GraphBuilder::default().build(docs).unwrap();
        assert_eq!(
            corpus.categories(),
            vec![
                ("setup".to_string(), 2),
                ("api".to_string(), 1),
                ("root".to_string(), 1),
            ]
        );
    }

    #[test]
    fn test_empty_corpus_builds() {
        let corpus = GraphBuilder::default().build(Vec::new()).unwrap();
        assert!(corpus.is_empty());
        assert_eq!(corpus.stats().documents, 0);
    }
}
