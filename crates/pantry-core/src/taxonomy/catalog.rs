//! The storefront's built-in category tree.

use super::CategoryNode;

pub const ROOT_NAME: &str = "All Products";

fn leaf(name: &str) -> CategoryNode {
    CategoryNode::new(name, Vec::new())
}

fn node(name: &str, children: Vec<CategoryNode>) -> CategoryNode {
    CategoryNode::new(name, children)
}

fn leaves(names: &[&str]) -> Vec<CategoryNode> {
    names.iter().map(|n| leaf(n)).collect()
}

/// Returns the nested literal the built-in taxonomy is flattened from.
#[must_use]
#[allow(clippy::too_many_lines)]
pub fn builtin_tree() -> CategoryNode {
    node(
        ROOT_NAME,
        vec![
            node(
                "Fresh & Chilled",
                vec![
                    node(
                        "Dairy",
                        vec![
                            leaf("Milk"),
                            leaf("Butter"),
                            leaf("Yoghurt"),
                            leaf("Cream"),
                            node(
                                "Cheese",
                                leaves(&[
                                    "Cheddar",
                                    "Brie & Camembert",
                                    "Goats Cheese",
                                    "Blue Cheese",
                                    "Greek",
                                ]),
                            ),
                        ],
                    ),
                    node("Dairy Alternatives", leaves(&["Plant Milks", "Vegan Cheese"])),
                    leaf("Eggs"),
                    leaf("Tofu & Tempeh"),
                    leaf("Fresh Pasta"),
                ],
            ),
            node(
                "Meat & Fish",
                vec![
                    node("Fresh Meat", leaves(&["Beef", "Chicken", "Lamb", "Pork"])),
                    node("Deli", leaves(&["Greek", "Italian", "Spanish"])),
                    node("Fish & Seafood", leaves(&["Smoked Fish", "Tinned Fish"])),
                ],
            ),
            node(
                "Fruit & Veg",
                leaves(&["Fresh Fruit", "Fresh Vegetables", "Salad", "Herbs"]),
            ),
            node(
                "Bakery",
                vec![
                    node("Bread", leaves(&["Sourdough", "Gluten Free Bread"])),
                    leaf("Cakes & Pastries"),
                    leaf("Wraps & Flatbreads"),
                ],
            ),
            node(
                "Food Cupboard",
                vec![
                    node("Pasta, Rice & Grains", leaves(&["Pasta", "Rice", "Grains"])),
                    node("Tins & Jars", leaves(&["Beans & Pulses", "Tomatoes"])),
                    node(
                        "Sauces & Condiments",
                        leaves(&["Pasta Sauces", "Cooking Sauces", "Condiments"]),
                    ),
                    leaf("Oils & Vinegars"),
                    leaf("Herbs & Spices"),
                    node("Baking", leaves(&["Flour", "Sugar & Sweeteners"])),
                    node(
                        "Breakfast",
                        leaves(&["Cereals", "Granola & Muesli", "Porridge Oats"]),
                    ),
                    node("Spreads", leaves(&["Nut Butters", "Jams & Honey"])),
                    node(
                        "Nuts, Seeds & Dried Fruit",
                        leaves(&["Nuts", "Seeds", "Dried Fruit"]),
                    ),
                ],
            ),
            node(
                "Snacks & Confectionery",
                leaves(&["Crisps", "Chocolate", "Biscuits", "Bars"]),
            ),
            node(
                "Drinks",
                leaves(&["Tea", "Coffee", "Juices", "Soft Drinks", "Kombucha"]),
            ),
            node(
                "Frozen",
                leaves(&["Ice Cream", "Frozen Vegetables", "Frozen Meals"]),
            ),
            node(
                "Health & Beauty",
                leaves(&["Supplements", "Body Care", "Oral Care"]),
            ),
            node("Household", leaves(&["Cleaning", "Laundry"])),
        ],
    )
}
