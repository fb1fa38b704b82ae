//! Built-in lookup data for the nutrition estimator.
//!
//! Figures are rough USDA FoodData Central approximations per the stated
//! serving; they are good enough for a disclosed estimate and nothing more.

/// `(item, per, calories, fat_g, protein_g, carbs_g)`
pub(crate) const NUTRITION_ROWS: &[(&str, &str, f64, f64, f64, f64)] = &[
    ("butter", "1 tbsp", 102.0, 11.5, 0.1, 0.0),
    ("margarine", "1 tbsp", 100.0, 11.0, 0.0, 0.0),
    ("milk", "1 cup", 150.0, 8.0, 8.0, 12.0),
    ("cream", "1 cup", 820.0, 88.0, 5.0, 7.0),
    ("heavy cream", "1 cup", 820.0, 88.0, 5.0, 7.0),
    ("sour cream", "1 cup", 445.0, 45.0, 5.0, 8.0),
    ("cream cheese", "1 oz", 99.0, 10.0, 2.0, 1.0),
    ("cheddar cheese", "1 oz", 113.0, 9.0, 7.0, 0.4),
    ("cheese", "1 oz", 110.0, 9.0, 7.0, 1.0),
    ("parmesan", "1 tbsp", 22.0, 1.4, 2.0, 0.2),
    ("egg", "1 large", 72.0, 5.0, 6.0, 0.4),
    ("eggs", "1 large", 72.0, 5.0, 6.0, 0.4),
    ("evaporated milk", "1 cup", 338.0, 19.0, 17.0, 25.0),
    ("condensed milk", "1 cup", 982.0, 27.0, 24.0, 166.0),
    ("yogurt", "1 cup", 150.0, 8.0, 9.0, 11.0),
    ("oil", "1 tbsp", 120.0, 14.0, 0.0, 0.0),
    ("vegetable oil", "1 tbsp", 120.0, 14.0, 0.0, 0.0),
    ("olive oil", "1 tbsp", 119.0, 13.5, 0.0, 0.0),
    ("shortening", "1 tbsp", 113.0, 13.0, 0.0, 0.0),
    ("lard", "1 tbsp", 115.0, 13.0, 0.0, 0.0),
    ("bacon grease", "1 tbsp", 116.0, 13.0, 0.0, 0.0),
    ("sugar", "1 cup", 774.0, 0.0, 0.0, 200.0),
    ("brown sugar", "1 cup", 836.0, 0.0, 0.0, 216.0),
    ("powdered sugar", "1 cup", 467.0, 0.0, 0.0, 119.0),
    ("confectioners sugar", "1 cup", 467.0, 0.0, 0.0, 119.0),
    ("honey", "1 tbsp", 64.0, 0.0, 0.1, 17.0),
    ("molasses", "1 tbsp", 58.0, 0.0, 0.0, 15.0),
    ("corn syrup", "1 tbsp", 57.0, 0.0, 0.0, 16.0),
    ("maple syrup", "1 tbsp", 52.0, 0.0, 0.0, 13.0),
    ("flour", "1 cup", 455.0, 1.2, 13.0, 95.0),
    ("all-purpose flour", "1 cup", 455.0, 1.2, 13.0, 95.0),
    ("bread flour", "1 cup", 495.0, 2.3, 16.0, 99.0),
    ("whole wheat flour", "1 cup", 407.0, 2.2, 16.0, 87.0),
    ("cake flour", "1 cup", 400.0, 1.0, 9.0, 85.0),
    ("cornmeal", "1 cup", 442.0, 4.4, 10.0, 94.0),
    ("oats", "1 cup", 307.0, 5.0, 11.0, 55.0),
    ("oatmeal", "1 cup", 307.0, 5.0, 11.0, 55.0),
    ("rice", "1 cup", 206.0, 0.4, 4.0, 45.0),
    ("bread crumbs", "1 cup", 427.0, 6.0, 14.0, 78.0),
    ("cornstarch", "1 tbsp", 31.0, 0.0, 0.0, 7.0),
    ("biscuit mix", "1 cup", 480.0, 17.0, 8.0, 72.0),
    ("chicken", "1 lb", 750.0, 42.0, 86.0, 0.0),
    ("chicken breast", "1 lb", 500.0, 11.0, 93.0, 0.0),
    ("ground beef", "1 lb", 1152.0, 88.0, 80.0, 0.0),
    ("beef", "1 lb", 1000.0, 70.0, 80.0, 0.0),
    ("pork", "1 lb", 1000.0, 72.0, 80.0, 0.0),
    ("ham", "1 lb", 650.0, 25.0, 100.0, 4.0),
    ("bacon", "1 slice", 43.0, 3.3, 3.0, 0.1),
    ("sausage", "1 lb", 1200.0, 100.0, 60.0, 4.0),
    ("tuna", "1 can", 200.0, 5.0, 40.0, 0.0),
    ("salmon", "1 lb", 830.0, 47.0, 90.0, 0.0),
    ("shrimp", "1 lb", 480.0, 8.0, 92.0, 4.0),
    ("crab", "1 lb", 400.0, 4.0, 80.0, 0.0),
    ("onion", "1 cup", 64.0, 0.2, 2.0, 15.0),
    ("onions", "1 cup", 64.0, 0.2, 2.0, 15.0),
    ("celery", "1 cup", 16.0, 0.2, 0.7, 3.0),
    ("carrot", "1 cup", 52.0, 0.3, 1.2, 12.0),
    ("carrots", "1 cup", 52.0, 0.3, 1.2, 12.0),
    ("potato", "1 medium", 161.0, 0.2, 4.0, 37.0),
    ("potatoes", "1 lb", 350.0, 0.4, 9.0, 80.0),
    ("tomato", "1 medium", 22.0, 0.2, 1.0, 5.0),
    ("tomatoes", "1 cup", 32.0, 0.4, 1.6, 7.0),
    ("green beans", "1 cup", 31.0, 0.1, 2.0, 7.0),
    ("corn", "1 cup", 132.0, 2.0, 5.0, 29.0),
    ("peas", "1 cup", 117.0, 0.6, 8.0, 21.0),
    ("spinach", "1 cup", 7.0, 0.1, 0.9, 1.0),
    ("lettuce", "1 cup", 5.0, 0.1, 0.5, 1.0),
    ("cabbage", "1 cup", 22.0, 0.1, 1.0, 5.0),
    ("mushrooms", "1 cup", 15.0, 0.2, 2.0, 2.0),
    ("bell pepper", "1 medium", 24.0, 0.2, 1.0, 6.0),
    ("garlic", "1 clove", 4.0, 0.0, 0.2, 1.0),
    ("broccoli", "1 cup", 31.0, 0.3, 2.5, 6.0),
    ("zucchini", "1 cup", 19.0, 0.2, 1.4, 4.0),
    ("apple", "1 medium", 95.0, 0.3, 0.5, 25.0),
    ("banana", "1 medium", 105.0, 0.4, 1.3, 27.0),
    ("lemon juice", "1 tbsp", 3.0, 0.0, 0.1, 1.0),
    ("orange juice", "1 cup", 112.0, 0.5, 2.0, 26.0),
    ("raisins", "1 cup", 434.0, 0.7, 5.0, 115.0),
    ("dates", "1 cup", 415.0, 0.4, 4.0, 110.0),
    ("coconut", "1 cup", 283.0, 27.0, 3.0, 12.0),
    ("pineapple", "1 cup", 82.0, 0.2, 0.9, 22.0),
    ("strawberries", "1 cup", 49.0, 0.5, 1.0, 12.0),
    ("blueberries", "1 cup", 84.0, 0.5, 1.0, 21.0),
    ("cherries", "1 cup", 87.0, 0.3, 1.5, 22.0),
    ("peaches", "1 cup", 60.0, 0.4, 1.4, 15.0),
    ("pecans", "1 cup", 753.0, 78.0, 10.0, 15.0),
    ("walnuts", "1 cup", 765.0, 76.0, 18.0, 16.0),
    ("almonds", "1 cup", 828.0, 72.0, 30.0, 28.0),
    ("peanuts", "1 cup", 828.0, 72.0, 38.0, 24.0),
    ("peanut butter", "1 tbsp", 94.0, 8.0, 4.0, 3.0),
    ("cream of mushroom soup", "1 can", 260.0, 18.0, 4.0, 20.0),
    ("cream of chicken soup", "1 can", 280.0, 18.0, 6.0, 22.0),
    ("cream of celery soup", "1 can", 220.0, 14.0, 4.0, 18.0),
    ("tomato soup", "1 can", 180.0, 4.0, 4.0, 32.0),
    ("tomato sauce", "1 cup", 59.0, 0.5, 3.0, 13.0),
    ("tomato paste", "1 tbsp", 13.0, 0.1, 0.7, 3.0),
    ("baking powder", "1 tsp", 2.0, 0.0, 0.0, 1.0),
    ("baking soda", "1 tsp", 0.0, 0.0, 0.0, 0.0),
    ("yeast", "1 packet", 21.0, 0.3, 3.0, 3.0),
    ("vanilla", "1 tsp", 12.0, 0.0, 0.0, 0.5),
    ("cocoa", "1 tbsp", 12.0, 0.7, 1.0, 3.0),
    ("chocolate chips", "1 cup", 805.0, 50.0, 7.0, 92.0),
    ("chocolate", "1 oz", 155.0, 9.0, 2.0, 17.0),
    ("gelatin", "1 packet", 23.0, 0.0, 6.0, 0.0),
    ("jello", "1 package", 80.0, 0.0, 2.0, 19.0),
    ("mayonnaise", "1 tbsp", 94.0, 10.0, 0.1, 0.1),
    ("mustard", "1 tsp", 3.0, 0.2, 0.2, 0.3),
    ("ketchup", "1 tbsp", 19.0, 0.0, 0.2, 5.0),
    ("soy sauce", "1 tbsp", 9.0, 0.0, 1.0, 1.0),
    ("worcestershire sauce", "1 tbsp", 13.0, 0.0, 0.0, 3.0),
    ("vinegar", "1 tbsp", 3.0, 0.0, 0.0, 0.0),
    ("salad dressing", "1 tbsp", 73.0, 8.0, 0.1, 1.0),
    ("hot sauce", "1 tsp", 1.0, 0.0, 0.0, 0.0),
    ("tabasco", "1 tsp", 1.0, 0.0, 0.0, 0.0),
    ("pickle", "1 medium", 7.0, 0.0, 0.0, 2.0),
    ("pickles", "1 cup", 17.0, 0.3, 0.5, 3.0),
    ("relish", "1 tbsp", 20.0, 0.0, 0.0, 5.0),
    ("salsa", "1 cup", 70.0, 0.0, 3.0, 14.0),
    ("picante sauce", "1 cup", 70.0, 0.0, 3.0, 14.0),
    ("water", "1 cup", 0.0, 0.0, 0.0, 0.0),
    ("coffee", "1 cup", 2.0, 0.0, 0.0, 0.0),
    ("tea", "1 cup", 2.0, 0.0, 0.0, 1.0),
    ("wine", "1 cup", 200.0, 0.0, 0.0, 4.0),
    ("beer", "1 cup", 103.0, 0.0, 1.0, 6.0),
    ("rum", "1 oz", 64.0, 0.0, 0.0, 0.0),
    ("vodka", "1 oz", 64.0, 0.0, 0.0, 0.0),
    ("whiskey", "1 oz", 70.0, 0.0, 0.0, 0.0),
    ("bourbon", "1 oz", 70.0, 0.0, 0.0, 0.0),
    ("brandy", "1 oz", 65.0, 0.0, 0.0, 0.0),
    ("sherry", "1 oz", 40.0, 0.0, 0.0, 2.0),
    ("cola", "1 cup", 97.0, 0.0, 0.0, 26.0),
    ("soda", "1 cup", 97.0, 0.0, 0.0, 26.0),
    ("ginger ale", "1 cup", 83.0, 0.0, 0.0, 21.0),
    ("club soda", "1 cup", 0.0, 0.0, 0.0, 0.0),
    ("cranberry juice", "1 cup", 116.0, 0.0, 0.0, 31.0),
    ("apple juice", "1 cup", 114.0, 0.0, 0.0, 28.0),
    ("grape juice", "1 cup", 152.0, 0.0, 1.0, 37.0),
    ("lime juice", "1 tbsp", 4.0, 0.0, 0.0, 1.0),
    ("limeade", "1 cup", 100.0, 0.0, 0.0, 26.0),
    ("lemonade", "1 cup", 99.0, 0.0, 0.0, 26.0),
    ("asparagus", "1 cup", 27.0, 0.2, 3.0, 5.0),
    ("artichoke", "1 medium", 60.0, 0.2, 4.0, 13.0),
    ("beets", "1 cup", 58.0, 0.2, 2.0, 13.0),
    ("brussels sprouts", "1 cup", 56.0, 0.8, 4.0, 11.0),
    ("cauliflower", "1 cup", 25.0, 0.3, 2.0, 5.0),
    ("cucumber", "1 cup", 16.0, 0.1, 0.7, 4.0),
    ("eggplant", "1 cup", 35.0, 0.2, 1.0, 9.0),
    ("kale", "1 cup", 33.0, 0.5, 2.0, 6.0),
    ("leek", "1 cup", 54.0, 0.3, 1.0, 13.0),
    ("okra", "1 cup", 33.0, 0.2, 2.0, 7.0),
    ("parsnips", "1 cup", 100.0, 0.4, 2.0, 24.0),
    ("pumpkin", "1 cup", 49.0, 0.2, 2.0, 12.0),
    ("radish", "1 cup", 19.0, 0.1, 0.8, 4.0),
    ("squash", "1 cup", 41.0, 0.4, 1.0, 10.0),
    ("sweet potato", "1 medium", 103.0, 0.1, 2.0, 24.0),
    ("turnip", "1 cup", 36.0, 0.1, 1.0, 8.0),
    ("watercress", "1 cup", 4.0, 0.0, 0.8, 0.4),
    ("green pepper", "1 medium", 24.0, 0.2, 1.0, 6.0),
    ("red pepper", "1 medium", 37.0, 0.4, 1.0, 7.0),
    ("jalapeno", "1 pepper", 4.0, 0.0, 0.1, 1.0),
    ("green onion", "1 cup", 32.0, 0.2, 2.0, 7.0),
    ("scallion", "1 cup", 32.0, 0.2, 2.0, 7.0),
    ("shallot", "1 tbsp", 7.0, 0.0, 0.3, 2.0),
    ("apricot", "1 cup", 74.0, 0.6, 2.0, 17.0),
    ("avocado", "1 medium", 322.0, 29.0, 4.0, 17.0),
    ("blackberries", "1 cup", 62.0, 0.7, 2.0, 14.0),
    ("cantaloupe", "1 cup", 54.0, 0.3, 1.0, 13.0),
    ("cranberries", "1 cup", 46.0, 0.1, 0.4, 12.0),
    ("figs", "1 cup", 371.0, 1.4, 5.0, 95.0),
    ("grapefruit", "1 medium", 82.0, 0.3, 2.0, 21.0),
    ("grapes", "1 cup", 104.0, 0.2, 1.0, 27.0),
    ("honeydew", "1 cup", 61.0, 0.2, 0.9, 15.0),
    ("kiwi", "1 medium", 42.0, 0.4, 0.8, 10.0),
    ("lemon", "1 medium", 17.0, 0.2, 0.6, 5.0),
    ("lime", "1 medium", 20.0, 0.1, 0.5, 7.0),
    ("mango", "1 cup", 99.0, 0.6, 1.0, 25.0),
    ("melon", "1 cup", 54.0, 0.3, 1.0, 13.0),
    ("nectarine", "1 medium", 62.0, 0.5, 2.0, 15.0),
    ("orange", "1 medium", 62.0, 0.2, 1.0, 15.0),
    ("papaya", "1 cup", 55.0, 0.2, 0.9, 14.0),
    ("pear", "1 medium", 101.0, 0.2, 0.6, 27.0),
    ("plum", "1 medium", 30.0, 0.2, 0.5, 8.0),
    ("prunes", "1 cup", 418.0, 0.7, 4.0, 111.0),
    ("raspberries", "1 cup", 64.0, 0.8, 1.5, 15.0),
    ("watermelon", "1 cup", 46.0, 0.2, 0.9, 12.0),
    ("turkey", "1 lb", 560.0, 12.0, 104.0, 0.0),
    ("lamb", "1 lb", 1100.0, 80.0, 84.0, 0.0),
    ("veal", "1 lb", 560.0, 20.0, 92.0, 0.0),
    ("duck", "1 lb", 600.0, 32.0, 76.0, 0.0),
    ("liver", "1 lb", 550.0, 14.0, 100.0, 16.0),
    ("hot dog", "1 link", 150.0, 13.0, 5.0, 2.0),
    ("pepperoni", "1 oz", 138.0, 12.0, 6.0, 1.0),
    ("corned beef", "1 lb", 700.0, 40.0, 80.0, 0.0),
    ("ground turkey", "1 lb", 680.0, 36.0, 84.0, 0.0),
    ("ground pork", "1 lb", 1200.0, 100.0, 68.0, 0.0),
    ("cod", "1 lb", 370.0, 3.0, 80.0, 0.0),
    ("tilapia", "1 lb", 430.0, 9.0, 92.0, 0.0),
    ("halibut", "1 lb", 500.0, 10.0, 96.0, 0.0),
    ("catfish", "1 lb", 460.0, 12.0, 80.0, 0.0),
    ("trout", "1 lb", 580.0, 24.0, 84.0, 0.0),
    ("lobster", "1 lb", 440.0, 4.0, 92.0, 0.0),
    ("scallops", "1 lb", 400.0, 4.0, 76.0, 12.0),
    ("oysters", "1 cup", 170.0, 6.0, 18.0, 10.0),
    ("clams", "1 cup", 168.0, 2.0, 29.0, 6.0),
    ("mussels", "1 cup", 172.0, 5.0, 24.0, 8.0),
    ("anchovies", "1 oz", 37.0, 1.4, 6.0, 0.0),
    ("sardines", "1 can", 190.0, 11.0, 23.0, 0.0),
    ("fish", "1 lb", 450.0, 10.0, 80.0, 0.0),
    ("black beans", "1 cup", 227.0, 0.9, 15.0, 41.0),
    ("kidney beans", "1 cup", 225.0, 0.9, 15.0, 40.0),
    ("pinto beans", "1 cup", 245.0, 1.1, 15.0, 45.0),
    ("navy beans", "1 cup", 255.0, 1.1, 15.0, 47.0),
    ("lima beans", "1 cup", 216.0, 0.7, 15.0, 39.0),
    ("chickpeas", "1 cup", 269.0, 4.3, 15.0, 45.0),
    ("garbanzo beans", "1 cup", 269.0, 4.3, 15.0, 45.0),
    ("lentils", "1 cup", 230.0, 0.8, 18.0, 40.0),
    ("split peas", "1 cup", 231.0, 0.8, 16.0, 41.0),
    ("refried beans", "1 cup", 237.0, 3.0, 14.0, 39.0),
    ("baked beans", "1 cup", 392.0, 13.0, 14.0, 54.0),
    ("tofu", "1 cup", 188.0, 12.0, 20.0, 5.0),
    ("buttermilk", "1 cup", 99.0, 2.2, 8.0, 12.0),
    ("cottage cheese", "1 cup", 220.0, 10.0, 28.0, 6.0),
    ("ricotta", "1 cup", 428.0, 32.0, 28.0, 8.0),
    ("mozzarella", "1 oz", 85.0, 6.0, 6.0, 1.0),
    ("swiss cheese", "1 oz", 108.0, 8.0, 8.0, 2.0),
    ("american cheese", "1 slice", 104.0, 9.0, 5.0, 1.0),
    ("blue cheese", "1 oz", 100.0, 8.0, 6.0, 1.0),
    ("feta cheese", "1 oz", 75.0, 6.0, 4.0, 1.0),
    ("goat cheese", "1 oz", 76.0, 6.0, 5.0, 0.0),
    ("ice cream", "1 cup", 274.0, 15.0, 5.0, 31.0),
    ("whipped cream", "1 cup", 400.0, 42.0, 2.0, 3.0),
    ("cool whip", "1 cup", 200.0, 13.0, 0.0, 17.0),
    ("half and half", "1 cup", 315.0, 28.0, 7.0, 10.0),
    ("whipping cream", "1 cup", 820.0, 88.0, 5.0, 7.0),
    ("pasta", "1 cup", 220.0, 1.3, 8.0, 43.0),
    ("noodles", "1 cup", 220.0, 3.0, 8.0, 40.0),
    ("egg noodles", "1 cup", 220.0, 3.0, 8.0, 40.0),
    ("spaghetti", "1 cup", 220.0, 1.3, 8.0, 43.0),
    ("macaroni", "1 cup", 220.0, 1.3, 8.0, 43.0),
    ("crackers", "1 oz", 130.0, 4.0, 3.0, 22.0),
    ("graham crackers", "1 sheet", 59.0, 1.4, 1.0, 11.0),
    ("tortilla", "1 medium", 90.0, 2.5, 2.0, 15.0),
    ("bread", "1 slice", 79.0, 1.0, 3.0, 15.0),
    ("bun", "1 bun", 120.0, 2.0, 4.0, 22.0),
    ("roll", "1 roll", 87.0, 2.0, 3.0, 15.0),
    ("croutons", "1 cup", 122.0, 2.0, 4.0, 22.0),
    ("stuffing mix", "1 cup", 350.0, 15.0, 6.0, 45.0),
    ("cereal", "1 cup", 120.0, 1.0, 3.0, 26.0),
    ("corn flakes", "1 cup", 100.0, 0.0, 2.0, 24.0),
    ("wheat germ", "1 tbsp", 26.0, 0.7, 2.0, 4.0),
    ("bran", "1 cup", 125.0, 3.0, 9.0, 37.0),
    ("wild rice", "1 cup", 166.0, 0.6, 7.0, 35.0),
    ("barley", "1 cup", 193.0, 0.7, 4.0, 44.0),
    ("couscous", "1 cup", 176.0, 0.3, 6.0, 36.0),
    ("quinoa", "1 cup", 222.0, 4.0, 8.0, 39.0),
    ("grits", "1 cup", 143.0, 0.5, 3.0, 31.0),
    ("polenta", "1 cup", 145.0, 0.6, 3.0, 31.0),
    ("canned tomatoes", "1 can", 80.0, 0.0, 4.0, 16.0),
    ("diced tomatoes", "1 can", 80.0, 0.0, 4.0, 16.0),
    ("crushed tomatoes", "1 can", 80.0, 0.0, 4.0, 16.0),
    ("stewed tomatoes", "1 can", 80.0, 0.0, 4.0, 16.0),
    ("rotel", "1 can", 50.0, 0.0, 2.0, 10.0),
    ("enchilada sauce", "1 cup", 80.0, 3.0, 2.0, 12.0),
    ("green chilies", "1 can", 30.0, 0.0, 1.0, 6.0),
    ("bamboo shoots", "1 cup", 25.0, 0.0, 2.0, 4.0),
    ("water chestnuts", "1 cup", 60.0, 0.0, 1.0, 15.0),
    ("olives", "1 cup", 145.0, 15.0, 1.0, 4.0),
    ("sauerkraut", "1 cup", 27.0, 0.0, 1.0, 6.0),
    ("pumpkin puree", "1 cup", 83.0, 0.7, 3.0, 20.0),
    ("pie filling", "1 cup", 300.0, 0.0, 1.0, 75.0),
    ("fruit cocktail", "1 cup", 181.0, 0.0, 1.0, 47.0),
    ("mandarin oranges", "1 cup", 154.0, 0.0, 2.0, 40.0),
    ("pineapple chunks", "1 cup", 150.0, 0.0, 1.0, 39.0),
    ("coconut milk", "1 cup", 445.0, 48.0, 5.0, 6.0),
    ("salt", "1 tsp", 0.0, 0.0, 0.0, 0.0),
    ("pepper", "1 tsp", 6.0, 0.1, 0.2, 2.0),
    ("cinnamon", "1 tsp", 6.0, 0.0, 0.1, 2.0),
    ("nutmeg", "1 tsp", 12.0, 0.8, 0.1, 1.0),
    ("ginger", "1 tsp", 6.0, 0.1, 0.2, 1.0),
    ("paprika", "1 tsp", 6.0, 0.3, 0.3, 1.0),
    ("cumin", "1 tsp", 8.0, 0.5, 0.4, 1.0),
    ("oregano", "1 tsp", 5.0, 0.2, 0.2, 1.0),
    ("basil", "1 tsp", 1.0, 0.0, 0.1, 0.1),
    ("thyme", "1 tsp", 4.0, 0.1, 0.1, 1.0),
    ("rosemary", "1 tsp", 4.0, 0.2, 0.1, 1.0),
    ("sage", "1 tsp", 2.0, 0.1, 0.1, 0.4),
    ("bay leaf", "1 leaf", 2.0, 0.0, 0.0, 0.0),
    ("tarragon", "1 tsp", 5.0, 0.1, 0.4, 1.0),
    ("parsley", "1 tbsp", 1.0, 0.0, 0.1, 0.2),
    ("cilantro", "1 tbsp", 0.0, 0.0, 0.0, 0.0),
    ("dill", "1 tsp", 3.0, 0.1, 0.2, 0.6),
    ("chives", "1 tbsp", 1.0, 0.0, 0.1, 0.1),
    ("mint", "1 tbsp", 1.0, 0.0, 0.1, 0.1),
    ("chili powder", "1 tsp", 8.0, 0.4, 0.3, 1.0),
    ("curry powder", "1 tsp", 7.0, 0.3, 0.3, 1.0),
    ("allspice", "1 tsp", 5.0, 0.2, 0.1, 1.0),
    ("cloves", "1 tsp", 7.0, 0.4, 0.1, 1.0),
    ("cardamom", "1 tsp", 6.0, 0.1, 0.2, 1.0),
    ("cayenne", "1 tsp", 6.0, 0.3, 0.2, 1.0),
    ("turmeric", "1 tsp", 8.0, 0.2, 0.3, 1.0),
    ("bouillon", "1 cube", 10.0, 0.5, 1.0, 1.0),
    ("chicken bouillon", "1 cube", 10.0, 0.5, 1.0, 1.0),
    ("beef bouillon", "1 cube", 10.0, 0.5, 1.0, 1.0),
    ("broth", "1 cup", 15.0, 0.5, 2.0, 1.0),
    ("chicken broth", "1 cup", 15.0, 0.5, 2.0, 1.0),
    ("beef broth", "1 cup", 17.0, 0.5, 3.0, 0.0),
    ("vegetable broth", "1 cup", 12.0, 0.0, 1.0, 2.0),
    ("cashews", "1 cup", 786.0, 63.0, 21.0, 45.0),
    ("macadamia", "1 cup", 962.0, 102.0, 11.0, 19.0),
    ("pine nuts", "1 cup", 909.0, 92.0, 18.0, 18.0),
    ("hazelnuts", "1 cup", 848.0, 82.0, 20.0, 23.0),
    ("pistachios", "1 cup", 691.0, 56.0, 26.0, 34.0),
    ("sunflower seeds", "1 cup", 818.0, 72.0, 29.0, 28.0),
    ("sesame seeds", "1 tbsp", 52.0, 5.0, 2.0, 2.0),
    ("poppy seeds", "1 tbsp", 46.0, 4.0, 2.0, 2.0),
    ("flax seeds", "1 tbsp", 37.0, 3.0, 1.0, 2.0),
    ("chia seeds", "1 tbsp", 58.0, 4.0, 2.0, 5.0),
    ("almond butter", "1 tbsp", 98.0, 9.0, 3.0, 3.0),
    ("tahini", "1 tbsp", 89.0, 8.0, 3.0, 3.0),
];

/// Cups per unit, relative to the table's reference serving. Anything not
/// listed counts as a whole item (scale 1).
pub(crate) const UNIT_SCALES: &[(&str, f64)] = &[
    ("cup", 1.0),
    ("cups", 1.0),
    ("c", 1.0),
    ("tbsp", 0.0625),
    ("tablespoon", 0.0625),
    ("tablespoons", 0.0625),
    ("tbs", 0.0625),
    ("tsp", 0.0208),
    ("teaspoon", 0.0208),
    ("teaspoons", 0.0208),
    ("t", 0.0208),
    ("oz", 0.125),
    ("ounce", 0.125),
    ("ounces", 0.125),
    ("lb", 1.0),
    ("lbs", 1.0),
    ("pound", 1.0),
    ("pounds", 1.0),
    ("can", 1.0),
    ("cans", 1.0),
    ("package", 1.0),
    ("packages", 1.0),
    ("pkg", 1.0),
    ("stick", 8.0),
    ("sticks", 8.0),
    ("large", 1.0),
    ("medium", 1.0),
    ("small", 0.75),
    ("clove", 1.0),
    ("cloves", 1.0),
    ("slice", 1.0),
    ("slices", 1.0),
    ("piece", 1.0),
    ("pieces", 1.0),
    ("packet", 1.0),
    ("envelope", 1.0),
    ("pint", 2.0),
    ("pints", 2.0),
    ("quart", 4.0),
    ("quarts", 4.0),
    ("qt", 4.0),
    ("gallon", 16.0),
];

/// Cups in a typical US can when the recipe just says "1 can".
pub(crate) const CAN_SIZES_CUPS: &[(&str, f64)] = &[
    ("cream of mushroom soup", 1.25),
    ("cream of chicken soup", 1.25),
    ("cream of celery soup", 1.25),
    ("tomato soup", 1.25),
    ("soup", 1.5),
    ("tomatoes", 1.75),
    ("diced tomatoes", 1.75),
    ("crushed tomatoes", 1.75),
    ("tomato sauce", 1.0),
    ("beans", 1.75),
    ("corn", 1.75),
    ("peas", 1.75),
    ("green beans", 1.75),
    ("pumpkin", 1.875),
    ("fruit cocktail", 1.875),
    ("pineapple", 1.5),
    ("mandarin oranges", 1.375),
    ("olives", 0.75),
    ("green chilies", 0.5),
    ("rotel", 1.25),
    ("tuna", 1.0),
    ("salmon", 1.75),
    ("crab", 0.75),
    ("shrimp", 0.5),
    ("clams", 0.8),
    ("evaporated milk", 1.5),
    ("condensed milk", 1.25),
    ("broth", 1.75),
    ("chicken broth", 1.75),
    ("beef broth", 1.75),
    ("coconut milk", 1.75),
];

/// Cups in a typical US jar.
pub(crate) const JAR_SIZES_CUPS: &[(&str, f64)] = &[
    ("salsa", 2.0),
    ("picante sauce", 2.0),
    ("spaghetti sauce", 3.0),
    ("pasta sauce", 3.0),
    ("marinara", 3.0),
    ("alfredo sauce", 2.0),
    ("peanut butter", 2.0),
    ("jelly", 1.5),
    ("jam", 1.5),
    ("mayonnaise", 2.0),
    ("pickles", 2.0),
    ("relish", 1.0),
    ("mustard", 1.0),
    ("applesauce", 3.0),
    ("maraschino cherries", 0.625),
];

/// Usual amount of an ingredient when the quantity is missing entirely,
/// expressed in the ingredient's table unit.
pub(crate) const DEFAULT_QUANTITIES: &[(&str, f64)] = &[
    ("chicken", 1.0),
    ("beef", 1.0),
    ("pork", 1.0),
    ("ground beef", 1.0),
    ("ground turkey", 1.0),
    ("ham", 0.5),
    ("bacon", 6.0),
    ("sausage", 1.0),
    ("fish", 1.0),
    ("shrimp", 1.0),
    ("crab", 0.5),
    ("egg", 2.0),
    ("eggs", 2.0),
    ("milk", 1.0),
    ("butter", 2.0),
    ("cheese", 1.0),
    ("cream cheese", 8.0),
    ("sour cream", 1.0),
    ("onion", 1.0),
    ("garlic", 2.0),
    ("celery", 0.5),
    ("carrot", 1.0),
    ("potato", 2.0),
    ("tomato", 1.0),
    ("bell pepper", 1.0),
    ("mushrooms", 1.0),
    ("flour", 2.0),
    ("sugar", 1.0),
    ("oil", 2.0),
    ("salt", 1.0),
    ("pepper", 0.25),
];

pub(crate) const DEFAULT_CAN_CUPS: f64 = 1.5;
pub(crate) const DEFAULT_JAR_CUPS: f64 = 2.0;
