/// Spanish display names for the upstream region labels. Applied at render
/// time only; canonical records always keep the source value.
pub fn region_label_es(region: &str) -> &str {
    match region {
        "Africa" => "África",
        "Americas" => "América",
        "Antarctic" => "Antártida",
        "Asia" => "Asia",
        "Europe" => "Europa",
        "Oceania" => "Oceanía",
        other => other,
    }
}
