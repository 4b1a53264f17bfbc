use anyhow::Result;
use clap::ValueEnum;
use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};
use tropicos_api::types::{
    ChromosomeCount, Distribution, Image, Name, NameReference, NameSummary, Reference,
    SearchResult, Specimen, Synonym, TypeSpecimen,
};

use crate::xml_output;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
    Markdown,
    Xml,
}

/// Root and item element names used for XML output.
pub struct XmlTags {
    pub root: &'static str,
    pub item: &'static str,
}

#[derive(Tabled, Serialize)]
pub struct SearchRow {
    #[tabled(rename = "Id")]
    #[serde(rename = "Id")]
    id: String,
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    name: String,
    #[tabled(rename = "Family")]
    #[serde(rename = "Family")]
    family: String,
    #[tabled(rename = "Rank")]
    #[serde(rename = "Rank")]
    rank: String,
    #[tabled(rename = "Status")]
    #[serde(rename = "Status")]
    status: String,
    #[tabled(rename = "Published")]
    #[serde(rename = "Published")]
    published: String,
}

#[derive(Tabled, Serialize)]
pub struct NameRow {
    #[tabled(rename = "Id")]
    #[serde(rename = "Id")]
    id: String,
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    name: String,
    #[tabled(rename = "Family")]
    #[serde(rename = "Family")]
    family: String,
    #[tabled(rename = "Rank")]
    #[serde(rename = "Rank")]
    rank: String,
    #[tabled(rename = "Status")]
    #[serde(rename = "Status")]
    status: String,
}

#[derive(Tabled, Serialize)]
pub struct SummaryRow {
    #[tabled(rename = "Id")]
    #[serde(rename = "Id")]
    id: String,
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    name: String,
    #[tabled(rename = "Family")]
    #[serde(rename = "Family")]
    family: String,
    #[tabled(rename = "Rank")]
    #[serde(rename = "Rank")]
    rank: String,
    #[tabled(rename = "Status")]
    #[serde(rename = "Status")]
    status: String,
    #[tabled(rename = "Synonyms")]
    #[serde(rename = "Synonyms")]
    synonyms: String,
    #[tabled(rename = "Accepted Names")]
    #[serde(rename = "Accepted Names")]
    accepted_names: String,
    #[tabled(rename = "Published In")]
    #[serde(rename = "Published In")]
    published_in: String,
}

#[derive(Tabled, Serialize)]
pub struct TypeSpecimenRow {
    #[tabled(rename = "Kind")]
    #[serde(rename = "Kind")]
    kind: String,
    #[tabled(rename = "Collector")]
    #[serde(rename = "Collector")]
    collector: String,
    #[tabled(rename = "Number")]
    #[serde(rename = "Number")]
    number: String,
    #[tabled(rename = "Institution")]
    #[serde(rename = "Institution")]
    institution: String,
}

#[derive(Tabled, Serialize)]
pub struct SynonymRow {
    #[tabled(rename = "Synonym")]
    #[serde(rename = "Synonym")]
    synonym: String,
    #[tabled(rename = "Accepted Name")]
    #[serde(rename = "Accepted Name")]
    accepted: String,
    #[tabled(rename = "Reference")]
    #[serde(rename = "Reference")]
    reference: String,
}

#[derive(Tabled, Serialize)]
pub struct DistributionRow {
    #[tabled(rename = "Country")]
    #[serde(rename = "Country")]
    country: String,
    #[tabled(rename = "Region")]
    #[serde(rename = "Region")]
    region: String,
    #[tabled(rename = "Upper Region")]
    #[serde(rename = "Upper Region")]
    upper_region: String,
    #[tabled(rename = "Reference")]
    #[serde(rename = "Reference")]
    reference: String,
}

#[derive(Tabled, Serialize)]
pub struct ReferenceRow {
    #[tabled(rename = "Id")]
    #[serde(rename = "Id")]
    id: String,
    #[tabled(rename = "Citation")]
    #[serde(rename = "Citation")]
    citation: String,
    #[tabled(rename = "Year")]
    #[serde(rename = "Year")]
    year: String,
    #[tabled(rename = "Accepted")]
    #[serde(rename = "Accepted")]
    accepted: String,
}

#[derive(Tabled, Serialize)]
pub struct ImageRow {
    #[tabled(rename = "Id")]
    #[serde(rename = "Id")]
    id: String,
    #[tabled(rename = "Kind")]
    #[serde(rename = "Kind")]
    kind: String,
    #[tabled(rename = "Caption")]
    #[serde(rename = "Caption")]
    caption: String,
    #[tabled(rename = "Photographer")]
    #[serde(rename = "Photographer")]
    photographer: String,
    #[tabled(rename = "License")]
    #[serde(rename = "License")]
    license: String,
    #[tabled(rename = "Thumbnail")]
    #[serde(rename = "Thumbnail")]
    thumbnail: String,
}

#[derive(Tabled, Serialize)]
pub struct ChromosomeCountRow {
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    name: String,
    #[tabled(rename = "Count")]
    #[serde(rename = "Count")]
    count: String,
    #[tabled(rename = "Reference")]
    #[serde(rename = "Reference")]
    reference: String,
}

#[derive(Tabled, Serialize)]
pub struct SpecimenRow {
    #[tabled(rename = "Id")]
    #[serde(rename = "Id")]
    id: String,
    #[tabled(rename = "Collector")]
    #[serde(rename = "Collector")]
    collector: String,
    #[tabled(rename = "Number")]
    #[serde(rename = "Number")]
    number: String,
    #[tabled(rename = "Institution")]
    #[serde(rename = "Institution")]
    institution: String,
    #[tabled(rename = "Country")]
    #[serde(rename = "Country")]
    country: String,
    #[tabled(rename = "Date")]
    #[serde(rename = "Date")]
    date: String,
    #[tabled(rename = "Coordinates")]
    #[serde(rename = "Coordinates")]
    coordinates: String,
}

// -- Row builders --

pub fn build_search_rows(hits: &[SearchResult]) -> Vec<SearchRow> {
    hits.iter()
        .map(|h| SearchRow {
            id: number(h.name_id),
            name: display_name(&h.scientific_name_with_authors, &h.scientific_name),
            family: text(&h.family),
            rank: text(&h.rank_abbreviation),
            status: text(&h.nomenclature_status_name),
            published: text(&h.display_date),
        })
        .collect()
}

pub fn build_name_rows(names: &[Name]) -> Vec<NameRow> {
    names
        .iter()
        .map(|n| NameRow {
            id: number(n.name_id),
            name: display_name(&n.scientific_name_with_authors, &n.scientific_name),
            family: text(&n.family),
            rank: n.rank.clone().or_else(|| n.rank_abbreviation.clone()).unwrap_or_default(),
            status: text(&n.nomenclature_status_name),
        })
        .collect()
}

pub fn build_summary_rows(summary: &NameSummary) -> Vec<SummaryRow> {
    vec![SummaryRow {
        id: number(summary.name_id),
        name: display_name(&summary.scientific_name_with_authors, &summary.scientific_name),
        family: text(&summary.family),
        rank: text(&summary.rank),
        status: text(&summary.nomenclature_status_name),
        synonyms: text(&summary.synonym_count),
        accepted_names: text(&summary.accepted_name_count),
        published_in: text(&summary.name_published_citation),
    }]
}

pub fn build_type_specimen_rows(specimens: &[TypeSpecimen]) -> Vec<TypeSpecimenRow> {
    specimens
        .iter()
        .map(|s| TypeSpecimenRow {
            kind: s
                .kind_of_type_name
                .clone()
                .or_else(|| s.kind_of_type_abbrev.clone())
                .unwrap_or_default(),
            collector: text(&s.collector_name),
            number: text(&s.collection_number),
            institution: text(&s.institution),
        })
        .collect()
}

pub fn build_synonym_rows(synonyms: &[Synonym]) -> Vec<SynonymRow> {
    synonyms
        .iter()
        .map(|s| SynonymRow {
            synonym: name_label(s.synonym_name.as_ref()),
            accepted: name_label(s.accepted_name.as_ref()),
            reference: reference_label(s.reference.as_ref()),
        })
        .collect()
}

pub fn build_distribution_rows(records: &[Distribution]) -> Vec<DistributionRow> {
    records
        .iter()
        .map(|d| {
            let location = d.location.clone().unwrap_or_default();
            DistributionRow {
                country: text(&location.country_name),
                region: text(&location.region_name),
                upper_region: text(&location.upper_name),
                reference: reference_label(d.reference.as_ref()),
            }
        })
        .collect()
}

pub fn build_reference_rows(refs: &[NameReference]) -> Vec<ReferenceRow> {
    refs.iter()
        .map(|r| {
            let reference = r.reference.as_ref();
            ReferenceRow {
                id: number(reference.and_then(|r| r.reference_id)),
                citation: reference
                    .and_then(|r| r.full_citation.clone().or_else(|| r.abbreviated_title.clone()))
                    .unwrap_or_default(),
                year: reference
                    .and_then(|r| r.year_published.clone().or_else(|| r.title_page_year.clone()))
                    .unwrap_or_default(),
                accepted: match r.accepted_by {
                    Some(true) => "yes".to_string(),
                    Some(false) => "no".to_string(),
                    None => String::new(),
                },
            }
        })
        .collect()
}

pub fn build_image_rows(images: &[Image]) -> Vec<ImageRow> {
    images
        .iter()
        .map(|i| ImageRow {
            id: number(i.image_id),
            kind: text(&i.image_kind_text),
            caption: i
                .caption
                .clone()
                .or_else(|| i.short_description.clone())
                .unwrap_or_default(),
            photographer: text(&i.photographer),
            license: text(&i.license_name),
            thumbnail: text(&i.thumbnail_url),
        })
        .collect()
}

pub fn build_chromosome_count_rows(counts: &[ChromosomeCount]) -> Vec<ChromosomeCountRow> {
    counts
        .iter()
        .map(|c| ChromosomeCountRow {
            name: text(&c.display_name),
            count: text(&c.sporophytic_count),
            reference: reference_label(c.reference.as_ref()),
        })
        .collect()
}

pub fn build_specimen_rows(specimens: &[Specimen]) -> Vec<SpecimenRow> {
    specimens
        .iter()
        .map(|s| SpecimenRow {
            id: number(s.specimen_id),
            collector: text(&s.collector_string),
            number: text(&s.collection_number),
            institution: text(&s.institution),
            country: text(&s.country_name),
            date: text(&s.date_display),
            coordinates: format_coordinates(s),
        })
        .collect()
}

// -- Rendering --

/// Prints `rows` as a table, Markdown, or CSV; JSON and XML render the full
/// `records` instead.
pub fn print_records<R, T>(rows: Vec<R>, records: &[T], tags: XmlTags, format: OutputFormat) -> Result<()>
where
    R: Tabled + Serialize,
    T: Serialize,
{
    match format {
        OutputFormat::Table => println!("{}", Table::new(rows)),
        OutputFormat::Markdown => {
            let mut table = Table::new(rows);
            table.with(Style::markdown());
            println!("{}", table);
        }
        OutputFormat::Csv => print_csv(&rows)?,
        OutputFormat::Json => print_json(&records)?,
        OutputFormat::Xml => println!("{}", xml_output::items_to_xml(tags.root, tags.item, records)?),
    }
    Ok(())
}

pub fn print_csv<R: Serialize>(rows: &[R]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(std::io::stdout());
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn print_json<T: Serialize>(data: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(data)?);
    Ok(())
}

fn text(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

fn number(value: Option<u64>) -> String {
    value.map(|n| n.to_string()).unwrap_or_default()
}

fn display_name(with_authors: &Option<String>, bare: &Option<String>) -> String {
    with_authors.clone().or_else(|| bare.clone()).unwrap_or_default()
}

fn name_label(name: Option<&Name>) -> String {
    name.map(|n| display_name(&n.scientific_name_with_authors, &n.scientific_name))
        .unwrap_or_default()
}

fn reference_label(reference: Option<&Reference>) -> String {
    let Some(r) = reference else {
        return String::new();
    };
    let title = r
        .abbreviated_title
        .clone()
        .or_else(|| r.full_citation.clone())
        .unwrap_or_default();
    let mut label = match &r.collation {
        Some(collation) if !title.is_empty() => format!("{} {}", title, collation),
        _ => title,
    };
    if let Some(year) = r.title_page_year.as_ref().or(r.year_published.as_ref()) {
        label = format!("{} ({})", label, year);
    }
    label.trim().to_string()
}

fn format_coordinates(specimen: &Specimen) -> String {
    match specimen.coordinates() {
        Some((lat, lon)) => format!("{:.4}, {:.4}", lat, lon),
        None => String::new(),
    }
}
