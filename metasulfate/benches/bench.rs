use criterion::{criterion_group, criterion_main, Criterion};
use metasulfate::{parse, Runtime, Share, Term};

macro_rules! include_demo {
    ($x:expr) => {
        include_str!(concat!("../../demos/", $x))
    };
}

/// Evaluate a program with a fresh runtime, so that nothing is cached yet.
fn eval(tm: &parse::Term<&str>) -> Term {
    let rt = Runtime::new();
    let tm: Term = tm.clone().share(rt.atoms());
    rt.evaluate(&tm)
}

/// Return the Peano numeral for `n`.
fn nat(n: usize) -> String {
    "[S ".repeat(n) + "Z" + &"]".repeat(n)
}

pub fn criterion_benchmark(c: &mut Criterion) {
    let peano = include_demo!("peano.meso");
    let boole = parse::Term::parse_str(include_demo!("bool.meso")).unwrap();
    let mul = peano.replace("[mul [S [S Z]] [S [S [S Z]]]]", &format!("[mul {} {}]", nat(8), nat(8)));
    let mul8 = parse::Term::parse_str(&mul).unwrap();

    c.bench_function("parse", |b| b.iter(|| parse::Term::parse_str(peano).unwrap()));
    c.bench_function("bool", |b| b.iter(|| eval(&boole)));
    c.bench_function("mul8", |b| b.iter(|| eval(&mul8)));
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
