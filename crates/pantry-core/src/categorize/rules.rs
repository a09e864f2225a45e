//! Built-in keyword table, most specific first.
//!
//! Ordering invariant: a keyword may not be a substring of any keyword in a
//! later rule. Broad entries (`cheese`, `sauce`) therefore sit at the bottom.

#[rustfmt::skip]
pub(crate) const BUILTIN_RULES: &[(&str, &[&str])] = &[
    // Chilled specialities before their generic parents.
    ("plant-milks", &["oat milk", "almond milk", "soya milk", "soy milk", "coconut milk", "rice milk", "oat drink", "almond drink", "soya drink"]),
    ("vegan-cheese", &["vegan cheese", "dairy free cheese", "plant based cheese", "violife"]),
    ("cheddar", &["cheddar"]),
    ("brie-and-camembert", &["brie", "camembert"]),
    ("goats-cheese", &["goats cheese", "goat cheese", "goat's cheese", "chevre"]),
    ("blue-cheese", &["blue cheese", "stilton", "gorgonzola", "roquefort"]),
    ("ice-cream", &["ice cream", "gelato", "sorbet"]),
    ("yoghurt", &["yoghurt", "yogurt", "kefir"]),
    ("nut-butters", &["peanut butter", "almond butter", "cashew butter", "nut butter", "tahini"]),
    ("beans-and-pulses", &["butter bean", "chickpea", "lentil", "kidney bean", "black bean", "baked bean", "cannellini", "borlotti"]),
    ("body-care", &["shampoo", "conditioner", "body wash", "hand cream", "soap", "deodorant", "moisturiser", "lotion"]),
    ("oral-care", &["toothpaste", "mouthwash", "toothbrush", "floss"]),
    ("biscuits", &["biscuit", "cookie", "digestive", "oatcake", "cracker"]),
    ("butter", &["butter", "ghee"]),
    ("cream", &["cream", "creme fraiche"]),
    ("bars", &["protein bar", "cereal bar", "snack bar", "flapjack"]),
    ("chocolate", &["chocolate", "cacao", "cocoa"]),
    ("milk", &["milk"]),
    ("eggs", &["eggs", "free range egg", "duck egg"]),
    ("tofu-and-tempeh", &["tofu", "tempeh", "seitan"]),
    // Sauces before the pasta they go on.
    ("pasta-sauces", &["pasta sauce", "pesto", "passata", "arrabbiata", "bolognese"]),
    ("cooking-sauces", &["curry sauce", "stir fry sauce", "curry paste", "cooking sauce", "simmer sauce"]),
    ("condiments", &["ketchup", "mayonnaise", "mayo", "mustard", "relish", "hot sauce", "soy sauce", "tamari", "chutney"]),
    ("fresh-pasta", &["fresh pasta", "ravioli", "tortellini", "gnocchi"]),
    ("pasta", &["pasta", "spaghetti", "penne", "fusilli", "linguine", "noodle", "lasagne"]),
    ("smoked-fish", &["smoked salmon", "smoked mackerel", "kipper"]),
    ("tinned-fish", &["tinned tuna", "tuna", "sardine", "anchov"]),
    ("fish-and-seafood", &["salmon", "cod fillet", "haddock", "prawn", "mackerel", "sea bass"]),
    ("beef", &["beef", "steak", "mince"]),
    ("chicken", &["chicken", "turkey"]),
    ("lamb", &["lamb"]),
    ("pork", &["pork", "bacon", "sausage", "gammon"]),
    ("frozen-vegetables", &["frozen peas", "frozen veg", "frozen sweetcorn", "frozen berries"]),
    ("frozen-meals", &["frozen pizza", "ready meal", "frozen meal"]),
    // Drinks before the fruit they are made from.
    ("juices", &["juice", "smoothie"]),
    ("soft-drinks", &["lemonade", "cola", "sparkling water", "tonic water", "ginger beer"]),
    ("kombucha", &["kombucha"]),
    ("coffee", &["coffee", "espresso"]),
    ("tea", &["tea", "chai", "matcha", "rooibos"]),
    ("oils-and-vinegars", &["olive oil", "coconut oil", "rapeseed oil", "sunflower oil", "sesame oil", "vinegar"]),
    ("herbs-and-spices", &["peppercorn", "black pepper", "cumin", "turmeric", "paprika", "cinnamon", "spice", "seasoning"]),
    ("crisps", &["crisps", "tortilla chips", "popcorn", "pretzel"]),
    ("tomatoes", &["chopped tomatoes", "tinned tomatoes", "plum tomatoes", "tomato puree"]),
    ("dried-fruit", &["dried fruit", "dried apricot", "raisin", "sultana", "medjool"]),
    ("fresh-fruit", &["apple", "banana", "orange", "lemon", "berries", "grape", "avocado"]),
    ("fresh-vegetables", &["potato", "carrot", "onion", "broccoli", "tomato", "pepper", "mushroom", "courgette"]),
    ("salad", &["salad", "lettuce", "rocket", "spinach"]),
    ("herbs", &["fresh basil", "fresh coriander", "fresh parsley", "fresh mint"]),
    ("wraps-and-flatbreads", &["tortilla wrap", "wrap", "pitta", "flatbread", "naan"]),
    ("sourdough", &["sourdough"]),
    ("gluten-free-bread", &["gluten free bread", "gf bread"]),
    ("porridge-oats", &["porridge", "rolled oats", "oats"]),
    ("granola-and-muesli", &["granola", "muesli"]),
    ("cereals", &["cereal", "cornflakes", "bran flakes", "puffed rice"]),
    ("bread", &["bread", "loaf", "bagel", "baguette"]),
    ("cakes-and-pastries", &["cake", "croissant", "brownie", "muffin", "pastry", "pastries"]),
    ("rice", &["rice", "basmati", "arborio"]),
    ("grains", &["quinoa", "couscous", "bulgur", "barley", "buckwheat", "millet"]),
    ("flour", &["flour"]),
    ("sugar-and-sweeteners", &["sugar", "maple syrup", "agave", "stevia", "sweetener"]),
    ("jams-and-honey", &["jam", "honey", "marmalade", "preserve"]),
    ("nuts", &["almonds", "cashew", "walnut", "peanuts", "hazelnut", "pistachio", "pecan", "nuts"]),
    ("seeds", &["chia", "flaxseed", "linseed", "pumpkin seed", "sunflower seed", "seeds"]),
    ("supplements", &["vitamin", "supplement", "protein powder", "magnesium", "omega"]),
    ("cleaning", &["washing up", "cleaner", "surface spray", "bin bag"]),
    ("laundry", &["laundry", "detergent", "fabric softener"]),
    // Broad fallbacks last.
    ("cheese", &["cheese", "feta", "halloumi", "mozzarella", "parmesan"]),
    ("sauces-and-condiments", &["sauce"]),
];
