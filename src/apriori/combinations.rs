/// Collect every `k`-combination of `items` in index order.
pub fn generate_combinations<T: Clone>(items: &[T], k: usize) -> Vec<Vec<T>> {
    let mut result = Vec::new();
    for_each_combination(items, k, &mut |combination: &[&T]| {
        result.push(combination.iter().map(|&item| item.clone()).collect());
    });
    result
}

/// Visit every `k`-combination of `items` without allocating per result.
///
/// Combinations are emitted in lexicographic index order: indices within a
/// combination strictly increase and earlier indices vary slowest.
pub fn for_each_combination<'a, T, F>(items: &'a [T], k: usize, callback: &mut F)
where
    F: FnMut(&[&'a T]),
{
    if k > items.len() {
        return;
    }
    let mut current = Vec::with_capacity(k);
    combinations_recursive(items, k, 0, &mut current, callback);
}

fn combinations_recursive<'a, T, F>(
    items: &'a [T],
    k: usize,
    start: usize,
    current: &mut Vec<&'a T>,
    callback: &mut F,
) where
    F: FnMut(&[&'a T]),
{
    if current.len() == k {
        callback(current.as_slice());
        return;
    }

    // Stop once too few items remain to fill the combination.
    let needed = k - current.len();
    for i in start..=items.len() - needed {
        current.push(&items[i]);
        combinations_recursive(items, k, i + 1, current, callback);
        current.pop();
    }
}

/// C(n, k), saturating on overflow
pub fn binomial(n: usize, k: usize) -> usize {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    let mut result: usize = 1;
    for i in 0..k {
        result = match result.checked_mul(n - i) {
            Some(product) => product / (i + 1),
            None => return usize::MAX,
        };
    }
    result
}
