// Recipes and tags shipped with the binary
use super::models::{Ingredient, Recipe, Tag};

const PLACEHOLDER_IMAGE: &str = "/static/images/placeholder.svg";

pub fn tags() -> Vec<Tag> {
    vec![
        Tag::new("Vegan", "/static/images/vegan.svg"),
        Tag::new("Vegetarian", "/static/images/vegetarian.svg"),
        Tag::new("Gluten-Free", "/static/images/glutenfree.svg"),
        Tag::new("Halal", "/static/images/halal.svg"),
        Tag::new("Dairy-Free", "/static/images/dairyfree.svg"),
    ]
}

pub fn recipes() -> Vec<Recipe> {
    vec![quinoa_buddha_bowl(), avocado_toast()]
}

fn quinoa_buddha_bowl() -> Recipe {
    Recipe {
        id: 1,
        name: "Quinoa Buddha Bowl".to_string(),
        description: "A nutritious bowl packed with protein-rich quinoa, fresh vegetables, \
                      and a delicious tahini dressing."
            .to_string(),
        tags: strings(&["Vegan", "Gluten-Free"]),
        image: PLACEHOLDER_IMAGE.to_string(),
        ingredients: vec![
            Ingredient::new("Quinoa", "1", Some("cup")),
            Ingredient::new("Mixed vegetables", "2", Some("cups")),
            Ingredient::new("Tahini", "2", Some("tbsp")),
            Ingredient::new("Lemon juice", "1", Some("tbsp")),
            Ingredient::new("Olive oil", "2", Some("tbsp")),
        ],
        instructions: strings(&[
            "Cook quinoa according to package instructions",
            "Steam or roast vegetables until tender",
            "Whisk together tahini, lemon juice, and olive oil for dressing",
            "Combine quinoa and vegetables in a bowl",
            "Drizzle with dressing and serve",
        ]),
        cooking_time: Some(30),
        servings: Some(2),
        notes: strings(&[
            "Rinse quinoa thoroughly before cooking to remove any bitter taste",
            "You can prepare the dressing ahead of time and store it in the fridge for up to 3 days",
            "Feel free to add protein of your choice like tofu, chickpeas, or tempeh",
            "For extra flavor, try adding fresh herbs like cilantro or parsley",
        ]),
    }
}

fn avocado_toast() -> Recipe {
    Recipe {
        id: 2,
        name: "Avocado Toast".to_string(),
        description: "Creamy avocado spread on toasted artisan bread, topped with microgreens \
                      and a sprinkle of everything bagel seasoning."
            .to_string(),
        tags: strings(&["Vegetarian", "Vegan"]),
        image: PLACEHOLDER_IMAGE.to_string(),
        ingredients: vec![
            Ingredient::new("Artisan bread", "2", Some("slices")),
            Ingredient::new("Avocado", "1", Some("whole")),
            Ingredient::new("Microgreens", "1/4", Some("cup")),
            Ingredient::new("Everything bagel seasoning", "1", Some("tbsp")),
        ],
        instructions: strings(&[
            "Toast bread until golden and crispy",
            "Mash avocado with a fork",
            "Spread mashed avocado on toast",
            "Top with microgreens and seasoning",
        ]),
        cooking_time: Some(10),
        servings: Some(1),
        notes: strings(&[
            "For extra creaminess, add a squeeze of lemon juice to the avocado",
            "If you don't have everything bagel seasoning, you can use a mix of sesame seeds, \
             poppy seeds, and salt",
            "Try adding a pinch of red pepper flakes for a spicy kick",
            "For a heartier meal, add a poached egg on top",
        ]),
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
