use crate::Catalog;

/// Print the slug each product name is filed under and the keyword that
/// decided it.
pub(crate) fn run_categorize(catalog: &Catalog, names: &[String]) {
    for name in names {
        match catalog.categorizer.matching_rule(name) {
            Some((position, rule, keyword)) => {
                println!("{:<28}{name}  (rule #{position}, keyword '{keyword}')", rule.slug);
            }
            None => println!("{:<28}{name}  (fallback)", catalog.categorizer.fallback()),
        }
    }
}

/// Report shadowed keywords and rule slugs missing from the taxonomy.
///
/// # Errors
///
/// Returns an error if any problem was found, so scripts can gate on it.
pub(crate) fn run_rules_check(catalog: &Catalog) -> anyhow::Result<()> {
    let shadowed = catalog.categorizer.shadowed_keywords();
    let unknown = catalog.categorizer.unknown_slugs(&catalog.taxonomy);
    let ambiguous: Vec<&str> = {
        let collisions = catalog.taxonomy.slug_collisions();
        catalog
            .categorizer
            .rules()
            .iter()
            .map(|r| r.slug.as_str())
            .filter(|slug| collisions.contains_key(slug))
            .collect()
    };

    for s in &shadowed {
        println!(
            "shadowed: '{}' ({} #{}) hides '{}' ({} #{})",
            s.keyword, s.slug, s.position, s.shadowed_keyword, s.shadowed_slug, s.shadowed_position
        );
    }
    for slug in &unknown {
        println!("unknown slug: {slug}");
    }
    for slug in &ambiguous {
        println!("ambiguous slug: {slug}");
    }

    let problems = shadowed.len() + unknown.len() + ambiguous.len();
    if problems > 0 {
        anyhow::bail!("{problems} problem(s) in keyword rules");
    }
    println!(
        "{} rules OK (fallback '{}')",
        catalog.categorizer.rules().len(),
        catalog.categorizer.fallback()
    );
    Ok(())
}
