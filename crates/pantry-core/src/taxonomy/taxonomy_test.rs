use std::collections::HashSet;

use super::*;

fn small_tree() -> CategoryNode {
    CategoryNode::new(
        "All Products",
        vec![
            CategoryNode::new(
                "Fresh & Chilled",
                vec![CategoryNode::new(
                    "Dairy",
                    vec![
                        CategoryNode::new("Milk", vec![]),
                        CategoryNode::new("Greek", vec![]),
                    ],
                )],
            ),
            CategoryNode::new("Deli", vec![CategoryNode::new("Greek", vec![])]),
        ],
    )
}

// -----------------------------------------------------------------------
// build
// -----------------------------------------------------------------------

#[test]
fn build_emits_pre_order_with_root_first() {
    let taxonomy = Taxonomy::build(&small_tree()).unwrap();
    let ids: Vec<&str> = taxonomy.categories().iter().map(|c| c.id.as_str()).collect();
    assert_eq!(
        ids,
        vec![
            "all-products",
            "fresh-and-chilled",
            "fresh-and-chilled-dairy",
            "fresh-and-chilled-dairy-milk",
            "fresh-and-chilled-dairy-greek",
            "deli",
            "deli-greek",
        ]
    );
}

#[test]
fn build_sets_parent_ids_and_children() {
    let taxonomy = Taxonomy::build(&small_tree()).unwrap();
    let root = taxonomy.root();
    assert_eq!(root.id, ROOT_ID);
    assert!(root.parent_id.is_none());
    assert_eq!(root.children, vec!["fresh-and-chilled", "deli"]);

    let dairy = taxonomy.by_id("fresh-and-chilled-dairy").unwrap();
    assert_eq!(dairy.parent_id.as_deref(), Some("fresh-and-chilled"));
    assert_eq!(
        dairy.children,
        vec!["fresh-and-chilled-dairy-milk", "fresh-and-chilled-dairy-greek"]
    );

    let top = taxonomy.by_id("deli").unwrap();
    assert_eq!(top.parent_id.as_deref(), Some(ROOT_ID));
}

#[test]
fn build_rejects_duplicate_ids() {
    let tree = CategoryNode::new(
        "All Products",
        vec![
            CategoryNode::new("Soft Drinks", vec![]),
            CategoryNode::new("Soft & Drinks", vec![]),
            CategoryNode::new("Soft  Drinks!", vec![]),
        ],
    );
    let err = Taxonomy::build(&tree).unwrap_err();
    assert_eq!(
        err,
        TaxonomyError::DuplicateId {
            id: "soft-drinks".to_string(),
            path: "Soft  Drinks!".to_string(),
        }
    );
}

#[test]
fn build_rejects_top_level_named_like_root() {
    let tree = CategoryNode::new(
        "Catalog",
        vec![CategoryNode::new("All Products", vec![])],
    );
    assert!(matches!(
        Taxonomy::build(&tree),
        Err(TaxonomyError::DuplicateId { ref id, .. }) if id == ROOT_ID
    ));
}

#[test]
fn build_rejects_empty_names() {
    let tree = CategoryNode::new(
        "All Products",
        vec![CategoryNode::new("Drinks", vec![CategoryNode::new("  ", vec![])])],
    );
    let err = Taxonomy::build(&tree).unwrap_err();
    assert!(err.to_string().contains("Drinks >"), "got: {err}");
}

#[test]
fn build_is_deterministic() {
    let a = Taxonomy::build(&builtin_tree()).unwrap();
    let b = Taxonomy::build(&builtin_tree()).unwrap();
    assert_eq!(a.categories(), b.categories());
}

// -----------------------------------------------------------------------
// lookups
// -----------------------------------------------------------------------

#[test]
fn by_slug_returns_first_pre_order_match() {
    let taxonomy = Taxonomy::build(&small_tree()).unwrap();
    assert_eq!(
        taxonomy.by_slug("greek").unwrap().id,
        "fresh-and-chilled-dairy-greek"
    );
    assert!(taxonomy.by_slug("bakery").is_none());
}

#[test]
fn by_name_is_case_insensitive_and_exact() {
    let taxonomy = Taxonomy::build(&small_tree()).unwrap();
    assert_eq!(taxonomy.by_name("fresh & chilled").unwrap().id, "fresh-and-chilled");
    assert_eq!(taxonomy.by_name("MILK").unwrap().id, "fresh-and-chilled-dairy-milk");
    assert!(taxonomy.by_name("Mil").is_none());
    assert!(taxonomy.by_name("").is_none());
}

#[test]
fn unknown_id_yields_empty_results() {
    let taxonomy = Taxonomy::build(&small_tree()).unwrap();
    assert!(taxonomy.by_id("nope").is_none());
    assert!(taxonomy.descendant_slugs("nope").is_empty());
    assert!(taxonomy.descendant_names("nope").is_empty());
    assert!(taxonomy.breadcrumb("nope").is_empty());
    assert!(taxonomy.children("nope").is_empty());
    assert!(taxonomy.parent("nope").is_none());
    assert!(taxonomy.depth("nope").is_none());
}

#[test]
fn descendants_are_self_inclusive_pre_order() {
    let taxonomy = Taxonomy::build(&small_tree()).unwrap();
    assert_eq!(
        taxonomy.descendant_slugs("fresh-and-chilled"),
        vec!["fresh-and-chilled", "dairy", "milk", "greek"]
    );
    assert_eq!(
        taxonomy.descendant_names("fresh-and-chilled-dairy"),
        vec!["Dairy", "Milk", "Greek"]
    );
    assert_eq!(taxonomy.descendant_slugs("deli-greek"), vec!["greek"]);
}

#[test]
fn breadcrumb_runs_top_down_without_root() {
    let taxonomy = Taxonomy::build(&small_tree()).unwrap();
    let crumbs: Vec<&str> = taxonomy
        .breadcrumb("fresh-and-chilled-dairy-milk")
        .iter()
        .map(|c| c.name.as_str())
        .collect();
    assert_eq!(crumbs, vec!["Fresh & Chilled", "Dairy", "Milk"]);
    assert!(taxonomy.breadcrumb(ROOT_ID).is_empty());
}

#[test]
fn depth_and_parent() {
    let taxonomy = Taxonomy::build(&small_tree()).unwrap();
    assert_eq!(taxonomy.depth(ROOT_ID), Some(0));
    assert_eq!(taxonomy.depth("deli"), Some(1));
    assert_eq!(taxonomy.depth("fresh-and-chilled-dairy-milk"), Some(3));
    assert_eq!(taxonomy.parent("deli").unwrap().id, ROOT_ID);
    assert!(taxonomy.parent(ROOT_ID).is_none());
}

#[test]
fn path_for_root_is_shop() {
    let taxonomy = Taxonomy::build(&small_tree()).unwrap();
    assert_eq!(taxonomy.path_for(taxonomy.root()), "/shop");
}

#[test]
fn resolve_path_disambiguates_repeated_slugs() {
    let taxonomy = Taxonomy::build(&small_tree()).unwrap();
    assert_eq!(
        taxonomy.resolve_path(&["deli", "greek"]).unwrap().id,
        "deli-greek"
    );
    assert_eq!(
        taxonomy
            .resolve_path(&["fresh-and-chilled", "dairy", "greek"])
            .unwrap()
            .id,
        "fresh-and-chilled-dairy-greek"
    );
    assert!(taxonomy.resolve_path(&["greek"]).is_none());
    assert_eq!(taxonomy.resolve_path::<&str>(&[]).unwrap().id, ROOT_ID);
}

#[test]
fn resolve_shop_path_parses_urls() {
    let taxonomy = Taxonomy::build(&small_tree()).unwrap();
    assert_eq!(taxonomy.resolve_shop_path("/shop").unwrap().id, ROOT_ID);
    assert_eq!(taxonomy.resolve_shop_path("/shop/").unwrap().id, ROOT_ID);
    assert_eq!(
        taxonomy.resolve_shop_path("/shop/deli/greek/").unwrap().id,
        "deli-greek"
    );
    assert!(taxonomy.resolve_shop_path("/shopping/deli").is_none());
    assert!(taxonomy.resolve_shop_path("/deli").is_none());
    assert!(taxonomy.resolve_shop_path("/shop/greek").is_none());
}

#[test]
fn slug_collisions_lists_shared_slugs() {
    let taxonomy = Taxonomy::build(&small_tree()).unwrap();
    let collisions = taxonomy.slug_collisions();
    assert_eq!(collisions.len(), 1);
    assert_eq!(
        collisions["greek"],
        vec!["fresh-and-chilled-dairy-greek", "deli-greek"]
    );
}

#[test]
fn category_serializes_with_camel_case_keys() {
    let taxonomy = Taxonomy::build(&small_tree()).unwrap();
    let json = serde_json::to_value(taxonomy.by_id("deli").unwrap()).unwrap();
    assert_eq!(json["parentId"], "all-products");
    assert_eq!(json["children"][0], "deli-greek");
    assert_eq!(json["slug"], "deli");
}

// -----------------------------------------------------------------------
// built-in taxonomy
// -----------------------------------------------------------------------

#[test]
fn builtin_has_single_root() {
    let roots: Vec<&Category> = taxonomy()
        .categories()
        .iter()
        .filter(|c| c.parent_id.is_none())
        .collect();
    assert_eq!(roots.len(), 1);
    assert_eq!(roots[0].id, ROOT_ID);
}

#[test]
fn builtin_parent_chains_reach_root_within_max_depth() {
    for category in taxonomy().categories().iter().filter(|c| !c.is_root()) {
        let mut steps = 0;
        let mut current = get_category_by_id(&category.id).unwrap();
        while let Some(parent_id) = current.parent_id.as_deref() {
            steps += 1;
            assert!(
                steps <= BUILTIN_MAX_DEPTH,
                "{} did not reach the root in {BUILTIN_MAX_DEPTH} steps",
                category.id
            );
            current = get_category_by_id(parent_id).unwrap();
        }
        assert_eq!(current.id, ROOT_ID);
    }
}

#[test]
fn builtin_ids_are_unique() {
    let mut seen = HashSet::new();
    for category in taxonomy().categories() {
        assert!(seen.insert(&category.id), "duplicate id {}", category.id);
    }
}

#[test]
fn builtin_descendants_cover_subtree_once() {
    for category in taxonomy().categories() {
        let descendants = taxonomy().descendants(&category.id);
        let ids: HashSet<&str> = descendants.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids.len(), descendants.len(), "repeat under {}", category.id);
        assert_eq!(descendants[0].id, category.id);

        for child_id in &category.children {
            assert!(ids.contains(child_id.as_str()));
        }

        // The only repeated slug lives under two different top-level
        // categories, so it only shows up twice from the root.
        if !category.is_root() {
            let slugs = get_all_descendant_slugs(&category.id);
            let unique: HashSet<&str> = slugs.iter().copied().collect();
            assert_eq!(unique.len(), slugs.len(), "repeated slug under {}", category.id);
            assert_eq!(slugs.iter().filter(|s| **s == category.slug).count(), 1);
        }
    }
}

#[test]
fn builtin_root_descendants_are_everything() {
    assert_eq!(get_all_descendant_slugs(ROOT_ID).len(), taxonomy().len());
    assert_eq!(get_all_descendant_names(ROOT_ID).len(), taxonomy().len());
}

#[test]
fn builtin_root_categories_in_order() {
    let names: Vec<&str> = get_root_categories()
        .iter()
        .map(|c| c.name.as_str())
        .collect();
    assert_eq!(names.first(), Some(&"Fresh & Chilled"));
    assert!(names.contains(&"Meat & Fish"));
    assert!(names.contains(&"Household"));
}

#[test]
fn builtin_path_for_top_level() {
    let category = get_category_by_name("Fresh & Chilled").unwrap();
    assert_eq!(build_category_path(category), "/shop/fresh-and-chilled");
}

#[test]
fn builtin_path_for_depth_three() {
    let milk = get_category_by_slug("milk").unwrap();
    assert_eq!(milk.id, "fresh-and-chilled-dairy-milk");
    assert_eq!(build_category_path(milk), "/shop/fresh-and-chilled/dairy/milk");
}

#[test]
fn builtin_breadcrumb_of_root_is_empty() {
    assert!(get_category_breadcrumb(ROOT_ID).is_empty());
}

#[test]
fn builtin_slug_round_trip_for_unique_slugs() {
    let collisions = taxonomy().slug_collisions();
    for category in taxonomy().categories() {
        if collisions.contains_key(category.slug.as_str()) {
            continue;
        }
        assert_eq!(get_category_by_slug(&category.slug).unwrap().id, category.id);
    }
}

#[test]
fn builtin_greek_slug_is_ambiguous() {
    let collisions = taxonomy().slug_collisions();
    assert_eq!(
        collisions.get("greek"),
        Some(&vec![
            "fresh-and-chilled-dairy-cheese-greek",
            "meat-and-fish-deli-greek"
        ])
    );
    assert_eq!(
        get_category_by_slug("greek").unwrap().id,
        "fresh-and-chilled-dairy-cheese-greek"
    );
}

#[test]
fn builtin_paths_resolve_back_to_category() {
    for category in taxonomy().categories() {
        let path = build_category_path(category);
        assert_eq!(
            taxonomy().resolve_shop_path(&path).map(|c| c.id.as_str()),
            Some(category.id.as_str()),
            "path {path}"
        );
    }
}
