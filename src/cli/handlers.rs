use super::{
    input::{Prompter, read_choice},
    table::print_rowset,
};
use crate::{
    di::DependenciesInject,
    domain::requests::{
        CreateMenuItemRequest, CreateUserRequest, LoginRequest, ProfileField,
        UpdateProfileRequest,
    },
    model::Role,
    session::{Cart, Session},
};
use anyhow::Result;

// Every handler traps service errors locally: the message goes to the
// error stream and control returns to the enclosing menu loop. Only
// input-stream failures propagate.

pub(super) async fn create_user(
    di: &DependenciesInject,
    prompter: &mut dyn Prompter,
) -> Result<()> {
    let login = prompter.read_line("\tEnter user login: ")?;
    let password = prompter.read_line("\tEnter user password: ")?;
    let phone_num = prompter.read_line("\tEnter user phone: ")?;

    let req = CreateUserRequest {
        login,
        password,
        phone_num,
    };

    match di.auth_service.register(&req).await {
        Ok(_) => println!("User successfully created!"),
        Err(e) => eprintln!("{e}"),
    }

    Ok(())
}

pub(super) async fn log_in(
    di: &DependenciesInject,
    prompter: &mut dyn Prompter,
) -> Result<Option<String>> {
    let login = prompter.read_line("\tEnter user login: ")?;
    let password = prompter.read_line("\tEnter user password: ")?;

    let req = LoginRequest { login, password };

    match di.auth_service.login(&req).await {
        Ok(Some(login)) => Ok(Some(login)),
        Ok(None) => {
            println!("Not authenticated: wrong login or password.");
            Ok(None)
        }
        Err(e) => {
            eprintln!("{e}");
            Ok(None)
        }
    }
}

enum SearchMode {
    Name,
    Type,
}

pub(super) async fn browse_menu(
    di: &DependenciesInject,
    session: &Session,
    prompter: &mut dyn Prompter,
) -> Result<()> {
    let Some(login) = session.login() else {
        return Ok(());
    };

    // Role is checked fresh on every Menu entry.
    let role = match di.menu_service.role_for(login).await {
        Ok(Some(role)) => role,
        Ok(None) => {
            println!("User does not exist");
            return Ok(());
        }
        Err(e) => {
            eprintln!("{e}");
            return Ok(());
        }
    };

    let back = if role.is_manager() { 5 } else { 3 };

    loop {
        match di.menu_service.listing().await {
            Ok(listing) => {
                print_rowset(&listing);
            }
            Err(e) => {
                eprintln!("{e}");
                return Ok(());
            }
        }

        println!("1. Search item by name");
        println!("2. Search items by type");
        if role.is_manager() {
            println!("3. Add item");
            println!("4. Delete item");
        }
        println!("{back}. Main Menu");

        let selection = prompter
            .read_line("Enter your selection: ")?
            .trim()
            .parse::<i32>()
            .unwrap_or(0);

        match selection {
            1 => search_items(di, SearchMode::Name, prompter).await?,
            2 => search_items(di, SearchMode::Type, prompter).await?,
            3 if role.is_manager() => add_items(di, role, prompter).await?,
            4 if role.is_manager() => delete_item(di, role, prompter).await?,
            s if s == back => break,
            _ => println!("Invalid Choice"),
        }
    }

    Ok(())
}

/// Repeats the search until an empty line returns to the item listing.
async fn search_items(
    di: &DependenciesInject,
    mode: SearchMode,
    prompter: &mut dyn Prompter,
) -> Result<()> {
    loop {
        let prompt = match mode {
            SearchMode::Name => "[Empty to return]\nEnter the item name: ",
            SearchMode::Type => "[Empty to return]\nEnter the item type: ",
        };
        let input = prompter.read_line(prompt)?;
        if input.is_empty() {
            break;
        }

        let result = match mode {
            SearchMode::Name => di.menu_service.search_by_name(&input).await,
            SearchMode::Type => di.menu_service.search_by_type(&input).await,
        };

        match result {
            Ok(rowset) => {
                if print_rowset(&rowset) == 0 {
                    println!("No matching items.");
                }
            }
            Err(e) => eprintln!("{e}"),
        }
    }

    Ok(())
}

async fn add_items(
    di: &DependenciesInject,
    role: Role,
    prompter: &mut dyn Prompter,
) -> Result<()> {
    loop {
        let item_name = prompter.read_line("Enter item name: ")?;
        let item_type = prompter.read_line("Enter item type: ")?;
        let price_line = prompter.read_line("Enter item price: ")?;
        let description = prompter.read_line("Enter item description: ")?;
        let image_url = prompter.read_line("Enter item's image URL: ")?;

        match price_line.trim().parse::<f64>() {
            Ok(price) => {
                let req = CreateMenuItemRequest {
                    item_name,
                    item_type,
                    price,
                    description,
                    image_url,
                };
                match di.menu_service.add_item(role, &req).await {
                    Ok(item) => println!("{} added to the menu.", item.item_name),
                    Err(e) => eprintln!("{e}"),
                }
            }
            Err(_) => println!("Invalid price: {price_line}"),
        }

        let again = prompter.read_line("Add another item [y/n]: ")?;
        if again.to_lowercase().contains('n') {
            break;
        }
    }

    Ok(())
}

async fn delete_item(
    di: &DependenciesInject,
    role: Role,
    prompter: &mut dyn Prompter,
) -> Result<()> {
    let name = prompter.read_line("[Empty to return]\nEnter the item name: ")?;
    if name.is_empty() {
        return Ok(());
    }

    match di.menu_service.delete_item(role, &name).await {
        Ok(0) => println!("No menu item named {name}."),
        Ok(_) => println!("{name} removed from the menu."),
        Err(e) => eprintln!("{e}"),
    }

    Ok(())
}

pub(super) async fn update_profile(
    di: &DependenciesInject,
    session: &mut Session,
    prompter: &mut dyn Prompter,
) -> Result<()> {
    let Some(login) = session.login().map(str::to_string) else {
        return Ok(());
    };

    println!("(1) to update login");
    println!("(2) to update phone");
    println!("(3) to update password");

    let field = match read_choice(prompter)? {
        1 => ProfileField::Login,
        2 => ProfileField::Phone,
        3 => ProfileField::Password,
        other => {
            println!("{other} is not an option.");
            return Ok(());
        }
    };

    let prompt = match field {
        ProfileField::Login => "Enter new login: ",
        ProfileField::Phone => "Enter new phone: ",
        ProfileField::Password => "Enter new password: ",
    };
    let value = prompter.read_line(prompt)?;

    let req = UpdateProfileRequest {
        login,
        field,
        value,
    };

    match di.profile_service.update(&req).await {
        Ok(user) => {
            // A renamed login re-keys the session.
            if field == ProfileField::Login {
                session.authorize(user.login);
            }
            println!("Profile updated.");
        }
        Err(e) => eprintln!("{e}"),
    }

    Ok(())
}

pub(super) async fn place_order(
    di: &DependenciesInject,
    session: &Session,
    prompter: &mut dyn Prompter,
) -> Result<()> {
    let Some(login) = session.login().map(str::to_string) else {
        return Ok(());
    };

    let mut cart = Cart::new();

    loop {
        println!("(1) to enter item name");
        println!("(2) to enter item type");
        println!("(3) to check out");
        println!("(4) to quit");

        match read_choice(prompter)? {
            1 => add_by_name(di, &mut cart, prompter).await?,
            2 => add_by_type(di, &mut cart, prompter).await?,
            3 => {
                if check_out(di, &login, &cart).await? {
                    break;
                }
            }
            4 => break,
            other => println!("{other} is not an option."),
        }
    }

    Ok(())
}

async fn add_by_name(
    di: &DependenciesInject,
    cart: &mut Cart,
    prompter: &mut dyn Prompter,
) -> Result<()> {
    let name = prompter.read_line("Enter item name: ")?;

    let item = match di.order_service.find_item(&name).await {
        Ok(Some(item)) => item,
        Ok(None) => {
            println!("No menu item named {name}.");
            return Ok(());
        }
        Err(e) => {
            eprintln!("{e}");
            return Ok(());
        }
    };

    println!(
        "{}\t{}\t{}\t{}",
        item.item_name, item.item_type, item.description, item.price
    );

    let answer = prompter.read_line("Order item? (y)es or (n)o: ")?;
    if answer.to_lowercase().starts_with('y') {
        cart.add(item.item_name.clone(), item.price);
        println!("{} added. Total: {}", item.item_name, cart.total());
    } else {
        println!("{} not added. Total: {}", item.item_name, cart.total());
    }

    Ok(())
}

async fn add_by_type(
    di: &DependenciesInject,
    cart: &mut Cart,
    prompter: &mut dyn Prompter,
) -> Result<()> {
    let item_type = prompter.read_line("Enter type: ")?;

    let items = match di.order_service.items_of_type(&item_type).await {
        Ok(items) => items,
        Err(e) => {
            eprintln!("{e}");
            return Ok(());
        }
    };

    if items.is_empty() {
        println!("No items of type {item_type}.");
        return Ok(());
    }

    for (idx, item) in items.iter().enumerate() {
        println!(
            "{}) {}\t{}\t{}",
            idx + 1,
            item.item_name,
            item.description,
            item.price
        );
    }

    let line = prompter.read_line("Enter number of item or (0) to exit: ")?;
    let selection = line.trim().parse::<usize>().unwrap_or(0);
    if selection == 0 {
        return Ok(());
    }

    match items.get(selection - 1) {
        Some(item) => {
            cart.add(item.item_name.clone(), item.price);
            println!("{} added. Total: {}", item.item_name, cart.total());
        }
        None => println!("{selection} is not an option."),
    }

    Ok(())
}

/// Returns true when the order went through and the order loop should
/// end; a failed checkout keeps the cart for another attempt.
async fn check_out(di: &DependenciesInject, login: &str, cart: &Cart) -> Result<bool> {
    match di.order_service.checkout(login, cart).await {
        Ok(order) => {
            println!("\nChecking out...");
            println!("------------------------------------------");
            println!("Items in cart:");
            for item in cart.items() {
                println!("\t* {}", item.name);
            }
            println!("\nTotal: {}", order.total);
            println!("Order submitted, order id = {}.", order.order_id);
            println!("------------------------------------------");
            Ok(true)
        }
        Err(e) => {
            eprintln!("{e}");
            Ok(false)
        }
    }
}

pub(super) async fn update_order(
    di: &DependenciesInject,
    prompter: &mut dyn Prompter,
) -> Result<()> {
    let line = prompter.read_line("Enter Order ID: ")?;
    let Ok(order_id) = line.trim().parse::<i32>() else {
        println!("Your input is invalid!");
        return Ok(());
    };

    let items = match di.order_service.order_items(order_id).await {
        Ok(items) => items,
        Err(e) => {
            eprintln!("{e}");
            return Ok(());
        }
    };

    if items.is_empty() {
        println!("No items for Order #{order_id}.");
        return Ok(());
    }

    println!("Items for Order #{order_id}:");
    for (idx, item) in items.iter().enumerate() {
        println!(
            "{}) {}\t{}\t{}\t{}",
            idx + 1,
            item.item_name,
            item.status,
            item.comments,
            item.last_updated
        );
    }

    let name = prompter.read_line("[Empty to return]\nEnter item to remove: ")?;
    if name.is_empty() {
        return Ok(());
    }

    match di.order_service.remove_order_item(order_id, &name).await {
        Ok(0) => println!("No item named {name} on Order #{order_id}."),
        Ok(_) => println!("{name} removed from Order #{order_id}."),
        Err(e) => eprintln!("{e}"),
    }

    Ok(())
}

pub(super) async fn order_history(di: &DependenciesInject, session: &Session) -> Result<()> {
    let Some(login) = session.login() else {
        return Ok(());
    };

    println!("\nOrder History:\n");
    match di.order_service.history(login).await {
        Ok(rowset) => {
            if print_rowset(&rowset) == 0 {
                println!("No past orders.");
            }
        }
        Err(e) => eprintln!("{e}"),
    }

    Ok(())
}
