use bigdecimal::BigDecimal;

use crate::models::{Category, NewMenuItem};

fn dish(name: &str, description: &str, cents: i64, category: Category, image: &str) -> NewMenuItem {
    NewMenuItem {
        name: name.to_string(),
        description: description.to_string(),
        price: BigDecimal::new(cents.into(), 2),
        category,
        image: image.to_string(),
    }
}

/// The house menu loaded into an empty backend.
pub fn seed_menu() -> Vec<NewMenuItem> {
    vec![
        dish(
            "Prime Ribeye Steak",
            "Perfectly aged and grilled to your preference, served with roasted vegetables and truffle mashed potatoes.",
            3299,
            Category::Mains,
            "https://images.unsplash.com/photo-1544025162-d76694265947?ixlib=rb-4.0.3&ixid=M3wxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8fA%3D%3D&auto=format&fit=crop&w=2069&q=80",
        ),
        dish(
            "Seafood Linguine",
            "Fresh linguine pasta tossed with shrimp, scallops, and mussels in a rich garlic white wine sauce.",
            2899,
            Category::Mains,
            "https://images.unsplash.com/photo-1563379926898-05f4575a45d8?ixlib=rb-4.0.3&ixid=M3wxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8fA%3D%3D&auto=format&fit=crop&w=2070&q=80",
        ),
        dish(
            "Chocolate Lava Cake",
            "Warm chocolate cake with a molten center, served with vanilla bean ice cream and fresh berries.",
            1299,
            Category::Desserts,
            "https://images.unsplash.com/photo-1551024601-bec78aea704b?ixlib=rb-4.0.3&ixid=M3wxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8fA%3D%3D&auto=format&fit=crop&w=1964&q=80",
        ),
        dish(
            "Caprese Salad",
            "Fresh mozzarella, heirloom tomatoes, and basil drizzled with balsamic glaze and extra virgin olive oil.",
            1499,
            Category::Starters,
            "https://images.unsplash.com/photo-1608897013039-887f21d8c804?ixlib=rb-4.0.3&ixid=M3wxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8fA%3D%3D&auto=format&fit=crop&w=1992&q=80",
        ),
        dish(
            "Truffle Mushroom Risotto",
            "Creamy Arborio rice with wild mushrooms, finished with truffle oil and Parmesan cheese.",
            2499,
            Category::Mains,
            "https://somuchfoodblog.com/wp-content/uploads/2018/12/63fe1-trufflerisotto5-e1587928372407.jpg",
        ),
        dish(
            "Crispy Calamari",
            "Tender calamari lightly fried and served with lemon aioli and marinara sauce.",
            1699,
            Category::Starters,
            "https://images.unsplash.com/photo-1599487488170-d11ec9c172f0?ixlib=rb-4.0.3&ixid=M3wxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8fA%3D%3D&auto=format&fit=crop&w=2080&q=80",
        ),
        dish(
            "Grilled Salmon",
            "Wild-caught salmon fillet grilled to perfection, served with quinoa pilaf and seasonal vegetables.",
            2799,
            Category::Mains,
            "https://images.unsplash.com/photo-1519708227418-c8fd9a32b7a2?ixlib=rb-4.0.3&ixid=M3wxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8fA%3D%3D&auto=format&fit=crop&w=2070&q=80",
        ),
        dish(
            "Tiramisu",
            "Classic Italian dessert with layers of coffee-soaked ladyfingers and mascarpone cream.",
            1199,
            Category::Desserts,
            "https://images.unsplash.com/photo-1571877227200-a0d98ea607e9?ixlib=rb-4.0.3&ixid=M3wxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8fA%3D%3D&auto=format&fit=crop&w=2071&q=80",
        ),
        dish(
            "French Onion Soup",
            "Rich beef broth with caramelized onions, topped with a toasted baguette and melted Gruyère cheese.",
            1399,
            Category::Starters,
            "https://www.simplyrecipes.com/thmb/7Ki7BcwR-4znJ5tuchu2d9DE5o4=/750x0/filters:no_upscale():max_bytes(150000):strip_icc():format(webp)/Simply-Recipes-French-Onion-Soup-LEAD-04-c1d3c0e12e2c4a3995bb35d082815f2d.jpg",
        ),
        dish(
            "Chicken Marsala",
            "Pan-seared chicken breast in a Marsala wine sauce with mushrooms, served with garlic mashed potatoes.",
            2599,
            Category::Mains,
            "https://images.unsplash.com/photo-1604908176997-125f25cc6f3d?ixlib=rb-4.0.3&ixid=M3wxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8fA%3D%3D&auto=format&fit=crop&w=1913&q=80",
        ),
        dish(
            "New York Cheesecake",
            "Creamy classic cheesecake with a graham cracker crust, topped with fresh berry compote.",
            1299,
            Category::Desserts,
            "https://images.unsplash.com/photo-1533134242443-d4fd215305ad?ixlib=rb-4.0.3&ixid=M3wxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8fA%3D%3D&auto=format&fit=crop&w=2070&q=80",
        ),
        dish(
            "Bruschetta",
            "Toasted baguette slices topped with diced tomatoes, fresh basil, garlic, and extra virgin olive oil.",
            1299,
            Category::Starters,
            "https://images.unsplash.com/photo-1572695157366-5e585ab2b69f?ixlib=rb-4.0.3&ixid=M3wxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8fA%3D%3D&auto=format&fit=crop&w=2071&q=80",
        ),
        dish(
            "Vegetable Stir Fry",
            "Seasonal vegetables stir-fried in a savory sauce, served over steamed jasmine rice.",
            1999,
            Category::Mains,
            "https://images.unsplash.com/photo-1512621776951-a57141f2eefd?ixlib=rb-4.0.3&ixid=M3wxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8fA%3D%3D&auto=format&fit=crop&w=2070&q=80",
        ),
        dish(
            "Crème Brûlée",
            "Smooth vanilla custard with a caramelized sugar crust, garnished with fresh berries.",
            1199,
            Category::Desserts,
            "https://images.unsplash.com/photo-1470124182917-cc6e71b22ecc?ixlib=rb-4.0.3&ixid=M3wxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8fA%3D%3D&auto=format&fit=crop&w=2070&q=80",
        ),
        dish(
            "Lobster Bisque",
            "Creamy soup made with lobster stock, aromatic vegetables, and a touch of brandy.",
            1599,
            Category::Starters,
            "https://images.unsplash.com/photo-1547592166-23ac45744acd?ixlib=rb-4.0.3&ixid=M3wxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8fA%3D%3D&auto=format&fit=crop&w=2071&q=80",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use bigdecimal::Zero;

    #[test]
    fn test_seed_menu_is_valid() {
        let menu = seed_menu();
        assert_eq!(menu.len(), 15);
        assert!(menu.iter().all(|i| i.validate().is_ok()));
        assert!(menu.iter().all(|i| i.price > BigDecimal::zero()));
    }

    #[test]
    fn test_seed_menu_prices_keep_cents() {
        let ribeye = seed_menu()
            .into_iter()
            .find(|i| i.name == "Prime Ribeye Steak")
            .unwrap();
        assert_eq!(ribeye.price.to_string(), "32.99");
        assert_eq!(ribeye.category, Category::Mains);
    }
}
