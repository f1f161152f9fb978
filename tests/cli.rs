use assert_cmd::Command;

fn aryabhata() -> Command{
    Command::cargo_bin("aryabhata").unwrap()
}

#[test]
fn prints_decimal_root(){
    aryabhata().args(["82", "--digits", "3"]).assert().success().stdout("9.055\n");
}

#[test]
fn defaults_to_integer_root(){
    aryabhata().arg("2025").assert().success().stdout("45\n");
    aryabhata().arg("2").assert().success().stdout("1\n");
}

#[test]
fn pads_small_roots(){
    aryabhata().args(["0", "--digits", "2"]).assert().success().stdout("0.00\n");
}

#[test]
fn handles_large_radicands(){
    aryabhata()
        .args(["000152415787532388367504942236884722755800955129", "--digits", "1"])
        .assert()
        .success()
        .stdout("12345678901234567890123.0\n");
}

#[test]
fn debug_prints_identity(){
    aryabhata()
        .args(["82", "--digits", "3", "--debug"])
        .assert()
        .success()
        .stdout("9.055\n[scaled-root] 9055\n[remainder]   6975\n[identity]    82000000 = 9055^2 + 6975\n");
}

#[test]
fn rejects_negative_radicand(){
    aryabhata().arg("-4").assert().failure().code(2);
}

#[test]
fn rejects_negative_digit_count(){
    aryabhata().args(["4", "--digits", "-1"]).assert().failure().code(2);
}

#[test]
fn rejects_malformed_radicand(){
    aryabhata().arg("four").assert().failure().code(2);
}

#[test]
fn rejects_misplaced_digit_separators(){
    for radicand in ["12_", "1__0", "_1"]{
        aryabhata().arg(radicand).assert().failure().code(2);
    }
    aryabhata().arg("1_0_0").assert().success().stdout("10\n");
}

#[test]
fn usage_errors_share_exit_status_with_clap(){
    aryabhata().args(["4", "--digits", "two"]).assert().failure().code(2);
}
