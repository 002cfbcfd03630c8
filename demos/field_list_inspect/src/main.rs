//! フィールド値のリスト要素とトークンを表示する例
//!
//! 使い方:
//!   cargo run -p field_list_inspect -- ' Foo ; Bar=Baz , "a,b" (x, y) c'
//!   cargo run -p field_list_inspect -- --find close 'Keep-Alive, Close'
//!   cargo run -p field_list_inspect -- --token chunked --tokens 'gzip, chunked'

use shiguredo_field_list::connection::Connection;
use shiguredo_field_list::vary::Vary;
use shiguredo_field_list::{
    FieldCursor, FieldList, FieldListLimits, canonicalize, contains_item, has_token,
    line_ends_with_token,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = noargs::raw_args();
    args.metadata_mut().app_name = "field_list_inspect";

    // --help フラグ
    noargs::HELP_FLAG.take_help(&mut args);

    // --version フラグ
    let version_flag: bool = noargs::flag("version")
        .short('V')
        .doc("Show version")
        .take(&mut args)
        .is_present();
    if version_flag {
        println!("{}", env!("CARGO_PKG_VERSION"));
        std::process::exit(0);
    }

    // --tokens フラグ
    let show_tokens: bool = noargs::flag("tokens")
        .doc("Split the value into ';' / ',' delimited tokens")
        .take(&mut args)
        .is_present();

    // --accept-whitespace フラグ
    let accept_whitespace: bool = noargs::flag("accept-whitespace")
        .doc("Do not treat whitespace as a token delimiter (with --tokens)")
        .take(&mut args)
        .is_present();

    // --find オプション
    let find: Option<String> = noargs::opt("find")
        .short('f')
        .doc("List item to look for (canonicalized before matching)")
        .take(&mut args)
        .present_and_then(|o| Ok::<_, &str>(o.value().to_string()))
        .map_err(|e| format!("{:?}", e))?;

    // --token オプション
    let token: Option<String> = noargs::opt("token")
        .short('t')
        .doc("Token to search for")
        .take(&mut args)
        .present_and_then(|o| Ok::<_, &str>(o.value().to_string()))
        .map_err(|e| format!("{:?}", e))?;

    // --max-items オプション
    let max_items: usize = noargs::opt("max-items")
        .doc("Maximum number of list items (default: 64)")
        .default("64")
        .take(&mut args)
        .then(|o| o.value().parse())
        .map_err(|e| format!("{:?}", e))?;

    // 位置引数: フィールド値
    let value: String = noargs::arg("<VALUE>")
        .doc("Header field value (e.g., 'Keep-Alive, Upgrade')")
        .take(&mut args)
        .then(|a| Ok::<_, &str>(a.value().to_string()))
        .map_err(|e| format!("{:?}", e))?;

    // 未知の引数があればエラー、ヘルプが返されたら表示
    if let Some(help) = args.finish().map_err(|e| format!("{:?}", e))? {
        print!("{}", help);
        return Ok(());
    }

    print_items(&value);

    let limits = FieldListLimits {
        max_items,
        ..FieldListLimits::default()
    };
    match FieldList::parse_with_limits(&value, &limits) {
        Ok(list) => println!("list: {}", list),
        Err(e) => eprintln!("list: {}", e),
    }
    match Connection::parse(&value) {
        Ok(connection) => println!(
            "connection: close={} keep-alive={}",
            connection.is_close(),
            connection.is_keep_alive()
        ),
        Err(e) => println!("connection: {}", e),
    }
    match Vary::parse(&value) {
        Ok(vary) => println!("vary: {}", vary),
        Err(e) => println!("vary: {}", e),
    }

    if show_tokens {
        print_tokens(&value, accept_whitespace);
    }

    if let Some(find) = find {
        let target = canonicalize(&find).ok_or("--find must not be empty")?;
        println!(
            "find {:?} (canonical {:?}): {}",
            find,
            target,
            contains_item(&value, &target)
        );
    }

    if let Some(token) = token {
        println!(
            "token {:?}: found={} last={}",
            token,
            has_token(&value, &token),
            line_ends_with_token(&value, &token)
        );
    }

    Ok(())
}

fn print_items(value: &str) {
    let mut cursor = FieldCursor::new(value);
    let mut index = 0;
    while let Some(item) = cursor.next_item() {
        let canonical = item.canonical();
        println!(
            "item[{}] {:?} -> {:?} ({}..{})",
            index,
            item.as_str(),
            canonical,
            item.span().start,
            item.span().end
        );
        index += 1;
    }
    if index == 0 {
        println!("no list items");
    }
}

fn print_tokens(value: &str, accept_whitespace: bool) {
    let mut cursor = FieldCursor::new(value);
    while !cursor.is_empty() {
        let before = cursor.position();
        let token = cursor.next_token(accept_whitespace);
        let delimiter = if cursor.skip_byte(b';') {
            ";"
        } else if cursor.skip_byte(b',') {
            ","
        } else {
            ""
        };
        println!("token {:?} {}", token, delimiter);
        if delimiter.is_empty() && cursor.position() == before {
            break;
        }
    }
}
