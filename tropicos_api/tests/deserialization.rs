use tropicos_api::types::{
    ChromosomeCount, Distribution, Image, Name, NameReference, NameSummary, SearchResult,
    Specimen, Synonym,
};

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

#[test]
fn deserialize_search_results() {
    let json = load_fixture("search.json");
    let hits: Vec<SearchResult> = serde_json::from_str(&json).unwrap();
    assert_eq!(hits.len(), 2);

    let alba = &hits[0];
    assert_eq!(alba.name_id, Some(13100047));
    assert_eq!(alba.scientific_name_with_authors.as_deref(), Some("Quercus alba L."));
    assert_eq!(alba.nomenclature_status_id, Some(1));
    assert_eq!(alba.display_date.as_deref(), Some("1753"));

    let repanda = &hits[1];
    assert_eq!(repanda.rank_abbreviation.as_deref(), Some("var."));
    assert_eq!(repanda.nomenclature_status_id, None);
    assert_eq!(repanda.display_reference, None);
}

#[test]
fn deserialize_summary_with_type_specimens() {
    let json = load_fixture("summary.json");
    let summary: NameSummary = serde_json::from_str(&json).unwrap();
    assert_eq!(summary.genus.as_deref(), Some("Quercus"));
    assert_eq!(summary.species_epithet.as_deref(), Some("alba"));
    assert_eq!(summary.synonym_count.as_deref(), Some("3"));
    assert_eq!(summary.accepted_name_count.as_deref(), Some("0"));

    let specimens = summary.type_specimens.unwrap();
    assert_eq!(specimens.len(), 1);
    assert_eq!(specimens[0].kind_of_type_abbrev.as_deref(), Some("LT"));
    assert_eq!(specimens[0].institution.as_deref(), Some("LINN"));
}

#[test]
fn deserialize_synonyms() {
    let json = load_fixture("synonyms.json");
    let synonyms: Vec<Synonym> = serde_json::from_str(&json).unwrap();
    let synonym = &synonyms[0];
    assert_eq!(
        synonym.synonym_name.as_ref().and_then(|n| n.name_id),
        Some(50239881)
    );
    assert_eq!(
        synonym.accepted_name.as_ref().and_then(|n| n.scientific_name.as_deref()),
        Some("Quercus alba")
    );
    assert_eq!(
        synonym.reference.as_ref().and_then(|r| r.reference_id),
        Some(1001)
    );
}

#[test]
fn deserialize_distributions_with_partial_location() {
    let json = load_fixture("distributions.json");
    let records: Vec<Distribution> = serde_json::from_str(&json).unwrap();
    assert_eq!(records.len(), 2);

    let us = records[0].location.as_ref().unwrap();
    assert_eq!(us.location_id, Some(7070));
    assert_eq!(us.country_location_id, Some(7070));
    assert_eq!(us.region_name.as_deref(), Some("Northern America"));
    assert_eq!(us.upper_location_id, Some(2));

    let canada = &records[1];
    assert_eq!(
        canada.location.as_ref().and_then(|l| l.country_name.as_deref()),
        Some("Canada")
    );
    assert!(canada.reference.is_none());
}

#[test]
fn deserialize_references_with_acceptance() {
    let json = load_fixture("references.json");
    let refs: Vec<NameReference> = serde_json::from_str(&json).unwrap();
    assert_eq!(refs[0].accepted_by, Some(true));
    assert_eq!(refs[1].accepted_by, Some(false));
    assert_eq!(
        refs[0].reference.as_ref().and_then(|r| r.article_title.as_deref()),
        Some("Fagaceae")
    );
    assert_eq!(refs[1].annotation, None);
}

#[test]
fn deserialize_images() {
    let json = load_fixture("images.json");
    let images: Vec<Image> = serde_json::from_str(&json).unwrap();
    let image = &images[0];
    assert_eq!(image.image_id, Some(100123));
    assert_eq!(image.license_name.as_deref(), Some("CC BY-NC-SA 3.0"));
    assert!(image
        .detail_jpg_url
        .as_deref()
        .unwrap()
        .ends_with("imageid=100123"));
}

#[test]
fn deserialize_chromosome_counts() {
    let json = load_fixture("chromosome_counts.json");
    let counts: Vec<ChromosomeCount> = serde_json::from_str(&json).unwrap();
    assert_eq!(counts[0].sporophytic_count.as_deref(), Some("2n = 24"));
    assert_eq!(
        counts[0].reference.as_ref().and_then(|r| r.title_page_year.as_deref()),
        Some("1985")
    );
}

#[test]
fn deserialize_specimens_and_coordinates() {
    let json = load_fixture("specimens.json");
    let specimens: Vec<Specimen> = serde_json::from_str(&json).unwrap();
    assert_eq!(specimens[0].coordinates(), Some((38.6167, -90.25)));
    assert_eq!(specimens[1].coordinates(), None);
    assert_eq!(specimens[1].collection_number, None);
}

#[test]
fn deserialize_higher_taxa_and_list() {
    let taxa: Vec<Name> = serde_json::from_str(&load_fixture("higher_taxa.json")).unwrap();
    assert_eq!(taxa.len(), 3);
    assert_eq!(taxa[2].rank.as_deref(), Some("genus"));
    assert_eq!(taxa[0].family, None);

    let names: Vec<Name> = serde_json::from_str(&load_fixture("list_names.json")).unwrap();
    assert_eq!(names[1].scientific_name.as_deref(), Some("Aa achalensis"));
}

#[test]
fn unknown_and_missing_fields_are_tolerated() {
    let json = r#"[{"Error": "No names were found"}]"#;
    let hits: Vec<SearchResult> = serde_json::from_str(json).unwrap();
    assert_eq!(hits, vec![SearchResult::default()]);
}

#[test]
fn serialization_keeps_wire_names() {
    let json = load_fixture("distributions.json");
    let records: Vec<Distribution> = serde_json::from_str(&json).unwrap();
    let value = serde_json::to_value(&records[0]).unwrap();
    assert_eq!(value["Location"]["CountryLocationID"], 7070);
    assert_eq!(value["Reference"]["AbbreviatedTitle"], "Fl. N. Amer.");
}
