use linefit::{compute_mse, fit, LineParams, Sample};

fn main() {
    let data = vec![
        Sample::new(1.0, 1.0),
        Sample::new(2.0, 2.0),
        Sample::new(3.0, 3.0),
    ];

    let alpha = 0.01;
    let iterations = 5000;

    let (bs, ws) = fit(&data, 0.0, 0.0, alpha, iterations);

    for (i, (b, w)) in bs.iter().zip(&ws).enumerate().step_by(500) {
        println!("Iteration {}: b = {b:.6}, w = {w:.6}, mse = {:.6}", i + 1, compute_mse(*b, *w, &data));
    }

    if let (Some(&b), Some(&w)) = (bs.last(), ws.last()) {
        println!("Final: y = {w:.4}*x + {b:.4}");

        let fitted = LineParams::new(b, w);
        for (sample, predicted) in data.iter().zip(fitted.predict_all(&data)) {
            println!("x = {}: y = {}, predicted = {predicted:.4}", sample.x, sample.y);
        }
    }
}
