const REFRESH_INTERVAL_MS: u64 = 30_000;

pub fn render_index() -> &'static str {
    INDEX_HTML
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Campus Canteen - Admin Dashboard</title>
  <style>
    :root {
      --bg-1: #667eea;
      --bg-2: #764ba2;
      --ink: #333333;
      --muted: #666666;
      --accent: #667eea;
      --accent-dark: #5568d3;
      --card: #ffffff;
      --shadow: 0 10px 30px rgba(0, 0, 0, 0.2);
    }

    * {
      margin: 0;
      padding: 0;
      box-sizing: border-box;
    }

    body {
      font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
      background: linear-gradient(135deg, var(--bg-1) 0%, var(--bg-2) 100%);
      color: var(--ink);
      min-height: 100vh;
      padding: 20px;
    }

    .container {
      max-width: 1400px;
      margin: 0 auto;
    }

    .card {
      background: var(--card);
      border-radius: 15px;
      box-shadow: var(--shadow);
    }

    header {
      padding: 30px;
      margin-bottom: 30px;
      text-align: center;
    }

    header h1 {
      font-size: 36px;
      margin-bottom: 10px;
    }

    header p {
      color: var(--muted);
      font-size: 18px;
    }

    .stats-grid {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(250px, 1fr));
      gap: 20px;
      margin-bottom: 30px;
    }

    .stat {
      padding: 25px;
      text-align: center;
    }

    .stat .icon {
      font-size: 48px;
      margin-bottom: 15px;
    }

    .stat .value {
      font-size: 32px;
      font-weight: bold;
      color: var(--accent);
      margin-bottom: 10px;
    }

    .stat .label {
      color: var(--muted);
      font-size: 16px;
    }

    .table-card {
      padding: 30px;
      margin-bottom: 30px;
    }

    .table-card h2 {
      margin-bottom: 20px;
    }

    table {
      width: 100%;
      border-collapse: collapse;
    }

    th,
    td {
      padding: 12px;
      text-align: left;
      border-bottom: 1px solid #ddd;
    }

    th {
      background: #f5f5f5;
      font-weight: 600;
    }

    .loading {
      text-align: center;
      padding: 40px;
      color: var(--muted);
    }

    .refresh {
      background: var(--accent);
      color: white;
      border: none;
      padding: 12px 24px;
      border-radius: 8px;
      cursor: pointer;
      font-size: 16px;
      margin-bottom: 20px;
    }

    .refresh:hover {
      background: var(--accent-dark);
    }
  </style>
</head>
<body>
  <div class="container">
    <header class="card">
      <h1>&#127869;&#65039; Campus Canteen Admin Dashboard</h1>
      <p>Real-time Analytics &amp; Transaction Monitoring</p>
    </header>

    <button class="refresh" id="refresh" type="button">&#128260; Refresh Data</button>

    <section class="stats-grid">
      <div class="card stat">
        <div class="icon">&#128176;</div>
        <div class="value" id="total-revenue">Loading...</div>
        <div class="label">Total Revenue Today</div>
      </div>
      <div class="card stat">
        <div class="icon">&#127828;</div>
        <div class="value" id="total-items">Loading...</div>
        <div class="label">Items Sold Today</div>
      </div>
      <div class="card stat">
        <div class="icon">&#9889;</div>
        <div class="value" id="avg-confidence">Loading...</div>
        <div class="label">Avg AI Confidence</div>
      </div>
      <div class="card stat">
        <div class="icon">&#128293;</div>
        <div class="value" id="top-item">Loading...</div>
        <div class="label">Top Item Today</div>
      </div>
    </section>

    <section class="card table-card">
      <h2>&#128202; Popular Items Today</h2>
      <table id="popular-items">
        <thead>
          <tr>
            <th>Food Item</th>
            <th>Quantity Sold</th>
            <th>Total Revenue</th>
            <th>Avg Confidence</th>
          </tr>
        </thead>
        <tbody>
          <tr><td colspan="4" class="loading">Loading data...</td></tr>
        </tbody>
      </table>
    </section>

    <section class="card table-card">
      <h2>&#128338; Recent Transactions</h2>
      <table id="recent-transactions">
        <thead>
          <tr>
            <th>Time</th>
            <th>Food Item</th>
            <th>Price</th>
            <th>Calories</th>
            <th>Confidence</th>
          </tr>
        </thead>
        <tbody>
          <tr><td colspan="5" class="loading">Loading data...</td></tr>
        </tbody>
      </table>
    </section>
  </div>

  <script>
    const REFRESH_MS = 30000;

    const fetchJson = async (url) => {
      const res = await fetch(url);
      const body = await res.json();
      if (!res.ok) {
        throw new Error(body.error || `Request failed: ${res.status}`);
      }
      return body;
    };

    const fillTable = (tableId, rows) => {
      const tbody = document.getElementById(tableId).querySelector('tbody');
      tbody.replaceChildren(
        ...rows.map((cells) => {
          const tr = document.createElement('tr');
          cells.forEach((text) => {
            const td = document.createElement('td');
            td.textContent = text;
            tr.appendChild(td);
          });
          return tr;
        })
      );
    };

    const loadData = async () => {
      try {
        const stats = await fetchJson('/api/stats');
        document.getElementById('total-revenue').textContent = `${stats.total_revenue} MKD`;
        document.getElementById('total-items').textContent = stats.total_items;
        document.getElementById('avg-confidence').textContent = `${stats.avg_confidence}%`;
        document.getElementById('top-item').textContent = stats.top_item;

        const popular = await fetchJson('/api/popular-items');
        fillTable(
          'popular-items',
          popular.map((item) => [
            item.food_name,
            item.quantity,
            `${item.revenue} MKD`,
            `${item.avg_confidence}%`,
          ])
        );

        const recent = await fetchJson('/api/recent-transactions');
        fillTable(
          'recent-transactions',
          recent.map((t) => [
            new Date(t.created_at).toLocaleTimeString(),
            t.food_name,
            `${t.price} MKD`,
            `${t.calories} kcal`,
            `${t.confidence}%`,
          ])
        );
      } catch (err) {
        console.error('Error loading data:', err);
      }
    };

    document.getElementById('refresh').addEventListener('click', () => loadData());

    loadData();
    setInterval(loadData, REFRESH_MS);
  </script>
</body>
</html>
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_polls_every_data_endpoint() {
        let html = render_index();
        for route in ["/api/stats", "/api/popular-items", "/api/recent-transactions"] {
            assert!(html.contains(route), "missing {route}");
        }
        assert!(html.contains(&format!("REFRESH_MS = {REFRESH_INTERVAL_MS}")));
    }

    #[test]
    fn page_has_no_template_placeholders() {
        assert!(!render_index().contains("{{"));
    }
}
