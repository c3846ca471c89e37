use chrono::{NaiveDate, NaiveTime};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use nutriflow_core::{last_7_day_totals, totals_by_category, totals_for_date, weekly_summary};
use nutriflow_domain::{DailyGoals, Meal, MealCategory, NewMeal};

fn sample_meals() -> Vec<Meal> {
    let categories = MealCategory::ALL;
    (0..512u32)
        .map(|idx| {
            let date = NaiveDate::from_ymd_opt(2024, 3, 1 + idx % 28).unwrap();
            NewMeal {
                name: format!("meal-{idx}"),
                calories: 250 + (idx % 7) * 100,
                protein: 20 + idx % 30,
                carbs: 30 + idx % 50,
                fat: 10 + idx % 20,
                time: NaiveTime::from_hms_opt(8 + idx % 12, 0, 0).unwrap(),
                category: categories[(idx % 4) as usize],
                date,
                image_ref: None,
            }
            .with_id(format!("id-{idx}"))
        })
        .collect()
}

fn bench_aggregation(c: &mut Criterion) {
    let meals = sample_meals();
    let anchor = NaiveDate::from_ymd_opt(2024, 3, 28).unwrap();
    let goals = DailyGoals::default();

    c.bench_function("totals_for_date", |b| {
        b.iter(|| totals_for_date(black_box(&meals), black_box(anchor)));
    });

    c.bench_function("totals_by_category", |b| {
        b.iter(|| totals_by_category(black_box(&meals), black_box(anchor)));
    });

    c.bench_function("weekly_summary_over_history", |b| {
        b.iter(|| {
            let history = last_7_day_totals(black_box(&meals), black_box(anchor));
            weekly_summary(black_box(&history), black_box(&goals))
        });
    });
}

criterion_group!(benches, bench_aggregation);
criterion_main!(benches);
