//! Repository functions over the three tables. Handlers pass an explicit
//! connection; nothing here touches a global handle. Cascades are spelled
//! out: dependent `restaurant_pizzas` rows go first, inside the same
//! transaction as the parent row.

use diesel::prelude::*;

use crate::models::{
    NewPizza, NewRestaurant, NewRestaurantPizza, Pizza, Restaurant, RestaurantPizza,
};
use crate::schema::{pizzas, restaurant_pizzas, restaurants};

pub fn list_restaurants(conn: &mut SqliteConnection) -> QueryResult<Vec<Restaurant>> {
    restaurants::table
        .select(Restaurant::as_select())
        .load(conn)
}

pub fn find_restaurant(conn: &mut SqliteConnection, id: i32) -> QueryResult<Option<Restaurant>> {
    restaurants::table
        .find(id)
        .select(Restaurant::as_select())
        .first(conn)
        .optional()
}

/// Menu of one restaurant, each entry paired with its pizza.
pub fn menu_for_restaurant(
    conn: &mut SqliteConnection,
    restaurant: &Restaurant,
) -> QueryResult<Vec<(RestaurantPizza, Pizza)>> {
    RestaurantPizza::belonging_to(restaurant)
        .inner_join(pizzas::table)
        .select((RestaurantPizza::as_select(), Pizza::as_select()))
        .load(conn)
}

pub fn delete_restaurant(conn: &mut SqliteConnection, id: i32) -> QueryResult<usize> {
    conn.transaction(|conn| {
        diesel::delete(
            restaurant_pizzas::table.filter(restaurant_pizzas::restaurant_id.eq(id)),
        )
        .execute(conn)?;
        diesel::delete(restaurants::table.find(id)).execute(conn)
    })
}

pub fn list_pizzas(conn: &mut SqliteConnection) -> QueryResult<Vec<Pizza>> {
    pizzas::table.select(Pizza::as_select()).load(conn)
}

pub fn find_pizza(conn: &mut SqliteConnection, id: i32) -> QueryResult<Option<Pizza>> {
    pizzas::table
        .find(id)
        .select(Pizza::as_select())
        .first(conn)
        .optional()
}

pub fn delete_pizza(conn: &mut SqliteConnection, id: i32) -> QueryResult<usize> {
    conn.transaction(|conn| {
        diesel::delete(restaurant_pizzas::table.filter(restaurant_pizzas::pizza_id.eq(id)))
            .execute(conn)?;
        diesel::delete(pizzas::table.find(id)).execute(conn)
    })
}

pub fn find_restaurant_pizza(
    conn: &mut SqliteConnection,
    id: i32,
) -> QueryResult<Option<RestaurantPizza>> {
    restaurant_pizzas::table
        .find(id)
        .select(RestaurantPizza::as_select())
        .first(conn)
        .optional()
}

/// Inserts an association and loads both parents in the same transaction.
/// Foreign key violations surface as the insert's `QueryResult` error.
pub fn create_restaurant_pizza(
    conn: &mut SqliteConnection,
    new_association: NewRestaurantPizza,
) -> QueryResult<(RestaurantPizza, Pizza, Restaurant)> {
    conn.transaction(|conn| {
        let association: RestaurantPizza = diesel::insert_into(restaurant_pizzas::table)
            .values(&new_association)
            .returning(RestaurantPizza::as_returning())
            .get_result(conn)?;
        let pizza = pizzas::table
            .find(association.pizza_id)
            .select(Pizza::as_select())
            .first(conn)?;
        let restaurant = restaurants::table
            .find(association.restaurant_id)
            .select(Restaurant::as_select())
            .first(conn)?;
        Ok((association, pizza, restaurant))
    })
}

pub fn insert_restaurant(
    conn: &mut SqliteConnection,
    new_restaurant: NewRestaurant<'_>,
) -> QueryResult<Restaurant> {
    diesel::insert_into(restaurants::table)
        .values(&new_restaurant)
        .returning(Restaurant::as_returning())
        .get_result(conn)
}

pub fn insert_pizza(conn: &mut SqliteConnection, new_pizza: NewPizza<'_>) -> QueryResult<Pizza> {
    diesel::insert_into(pizzas::table)
        .values(&new_pizza)
        .returning(Pizza::as_returning())
        .get_result(conn)
}

/// Clears the three tables and loads a small sample set. Restaurants and
/// pizzas have no creation endpoints, so this is how a fresh database gets
/// its rows.
pub fn seed(conn: &mut SqliteConnection) -> QueryResult<()> {
    conn.transaction(|conn| {
        diesel::delete(restaurant_pizzas::table).execute(conn)?;
        diesel::delete(restaurants::table).execute(conn)?;
        diesel::delete(pizzas::table).execute(conn)?;

        let sample_restaurants = [
            ("Karen's Pizza Shack", "123 Main Street"),
            ("Sanjay's Pizza", "45 Curry Lane"),
            ("Kiki's Pizza", "9 Ocean Avenue"),
        ];
        let sample_pizzas = [
            ("Emma", "Dough, Tomato Sauce, Cheese"),
            ("Geri", "Dough, Tomato Sauce, Cheese, Pepperoni"),
            ("Melanie", "Dough, Sauce, Ricotta, Red peppers, Mustard"),
        ];

        let mut restaurant_ids = Vec::new();
        for (name, address) in sample_restaurants {
            restaurant_ids.push(insert_restaurant(conn, NewRestaurant { name, address })?.id);
        }
        let mut pizza_ids = Vec::new();
        for (name, ingredients) in sample_pizzas {
            pizza_ids.push(insert_pizza(conn, NewPizza { name, ingredients })?.id);
        }

        for (index, (&restaurant_id, &pizza_id)) in
            restaurant_ids.iter().zip(pizza_ids.iter()).enumerate()
        {
            diesel::insert_into(restaurant_pizzas::table)
                .values(&NewRestaurantPizza {
                    price: 5 + index as i32,
                    pizza_id,
                    restaurant_id,
                })
                .execute(conn)?;
        }
        Ok(())
    })
}
