//! Lemma casing groupings.

use crate::entity::Lex;
use crate::finder;
use crate::grouping::{counts_by, group_by_having_multiple, multiple_counts_by};
use crate::model::Model;
use std::collections::{BTreeMap, BTreeSet};

/// Case-sensitive lemmas per lower-cased lemma.
pub fn cs_lemmas_by_lc_lemma(model: &Model) -> BTreeMap<String, BTreeSet<&str>> {
    let mut groups: BTreeMap<String, BTreeSet<&str>> = BTreeMap::new();
    for lex in model.lexes() {
        groups
            .entry(lex.lc_lemma())
            .or_default()
            .insert(lex.lemma.as_str());
    }
    groups
}

/// Case-sensitive lemmas of one lower-cased lemma, empty when unknown.
pub fn cs_lemmas_for_lc_lemma<'a>(model: &'a Model, lc_lemma: &str) -> BTreeSet<&'a str> {
    finder::lc_lexes(model, lc_lemma)
        .map(|lex| lex.lemma.as_str())
        .collect()
}

/// Lower-cased lemmas written with more than one casing, e.g.
/// `baroque -> {Baroque, baroque}`.
pub fn cs_lemmas_having_multiple_casings(model: &Model) -> BTreeMap<String, BTreeSet<&str>> {
    group_by_having_multiple(model.lexes().iter().map(|l| l.lemma.as_str()), |lemma| {
        lemma.to_lowercase()
    })
}

/// Number of distinct casings per lower-cased lemma.
pub fn counts_by_lc_lemma(model: &Model) -> BTreeMap<String, usize> {
    counts_by(model.lexes().iter().map(|l| l.lemma.as_str()), |lemma| {
        lemma.to_lowercase()
    })
}

/// Number of distinct casings, only for lemmas written in two or more.
pub fn multiple_counts_by_lc_lemma(model: &Model) -> BTreeMap<String, usize> {
    multiple_counts_by(model.lexes().iter().map(|l| l.lemma.as_str()), |lemma| {
        lemma.to_lowercase()
    })
}

/// Lower-cased lemma, then case-sensitive lemma, then lexes.
pub fn hyper_map_by_lc_lemma(model: &Model) -> BTreeMap<String, BTreeMap<&str, Vec<&Lex>>> {
    let mut map: BTreeMap<String, BTreeMap<&str, Vec<&Lex>>> = BTreeMap::new();
    for (lemma, ids) in model.lexes_by_lemma().iter() {
        let lexes = ids.iter().filter_map(|&id| model.lex(id)).collect();
        map.entry(lemma.to_lowercase())
            .or_default()
            .insert(lemma, lexes);
    }
    map
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::Category;
    use crate::model::ModelBuilder;

    fn model() -> Model {
        let mut builder = ModelBuilder::default();
        builder.add_lex(Lex::new("Baroque", Category::N));
        builder.add_lex(Lex::new("baroque", Category::A));
        builder.add_lex(Lex::new("baroque", Category::N));
        builder.add_lex(Lex::new("cello", Category::N));
        builder.build().unwrap()
    }

    #[test]
    fn test_cs_lemmas() {
        let model = model();
        let groups = cs_lemmas_by_lc_lemma(&model);
        assert_eq!(
            groups["baroque"].iter().copied().collect::<Vec<_>>(),
            vec!["Baroque", "baroque"]
        );
        assert_eq!(groups["cello"].len(), 1);

        let multiple = cs_lemmas_having_multiple_casings(&model);
        assert_eq!(multiple.keys().collect::<Vec<_>>(), vec!["baroque"]);

        let counts = counts_by_lc_lemma(&model);
        assert_eq!(counts["baroque"], 2);
        assert_eq!(counts["cello"], 1);

        let multiple = multiple_counts_by_lc_lemma(&model);
        assert_eq!(multiple.len(), 1);
        assert_eq!(multiple["baroque"], 2);
    }

    #[test]
    fn test_cs_lemmas_for_one_lemma() {
        let model = model();
        assert_eq!(
            cs_lemmas_for_lc_lemma(&model, "baroque").into_iter().collect::<Vec<_>>(),
            vec!["Baroque", "baroque"]
        );
        assert_eq!(cs_lemmas_for_lc_lemma(&model, "BAROQUE").len(), 2);
        assert!(cs_lemmas_for_lc_lemma(&model, "viola").is_empty());
    }

    #[test]
    fn test_hyper_map() {
        let model = model();
        let map = hyper_map_by_lc_lemma(&model);
        let baroque = &map["baroque"];
        assert_eq!(baroque.len(), 2);
        assert_eq!(baroque["Baroque"].len(), 1);
        assert_eq!(baroque["baroque"].len(), 2);
        assert_eq!(baroque["baroque"][0].category, Category::A);
    }
}
